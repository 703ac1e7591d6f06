use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(RecipeId);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new<N, I, S>(name: N, ingredients: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialog {
    Add,
    Edit,
}

impl Dialog {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialog::Add => "add",
            Dialog::Edit => "edit",
        }
    }
}

/// What `save` does while the edit dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveMode {
    /// Always append the draft, even from the edit dialog.
    Append,
    /// Write the draft back over the record the edit dialog targets.
    #[default]
    InPlace,
}

impl SaveMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "append" => Some(SaveMode::Append),
            "in_place" | "inplace" => Some(SaveMode::InPlace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub add_dialog_open: bool,
    pub edit_dialog_open: bool,
    pub active: Option<RecipeId>,
}

impl ViewState {
    pub fn is_open(&self, dialog: Dialog) -> bool {
        match dialog {
            Dialog::Add => self.add_dialog_open,
            Dialog::Edit => self.edit_dialog_open,
        }
    }
}
