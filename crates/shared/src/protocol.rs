use serde::{Deserialize, Serialize};

use crate::domain::{Dialog, Recipe, RecipeId};

/// One user action against the recipe store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Command {
    List,
    Remove {
        index: usize,
    },
    SetDraft {
        name: String,
        ingredients: Vec<String>,
    },
    CommitDraft,
    RenameAt {
        index: usize,
        name: String,
    },
    SetIngredientsAt {
        index: usize,
        ingredients: Vec<String>,
    },
    Open {
        dialog: Dialog,
        index: usize,
    },
    Close,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Remove { .. } => "remove",
            Command::SetDraft { .. } => "set_draft",
            Command::CommitDraft => "commit_draft",
            Command::RenameAt { .. } => "rename_at",
            Command::SetIngredientsAt { .. } => "set_ingredients_at",
            Command::Open { .. } => "open",
            Command::Close => "close",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub index: usize,
    pub id: RecipeId,
    pub recipe: Recipe,
}

/// What a dispatched [`Command`] did; the presentation layer re-renders on each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreEvent {
    Listed {
        recipes: Vec<RecipeSummary>,
    },
    RecipeRemoved {
        index: usize,
        id: RecipeId,
        recipe: Recipe,
    },
    DraftUpdated {
        draft: Recipe,
    },
    RecipeAdded {
        index: usize,
        id: RecipeId,
    },
    RecipeUpdated {
        index: usize,
        id: RecipeId,
    },
    DialogOpened {
        dialog: Dialog,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<RecipeId>,
    },
    DialogClosed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dialog: Option<Dialog>,
    },
}
