//! In-memory recipe collection with a draft staging area and add/edit dialog state.
//!
//! Every public mutation is total and synchronous: it either applies fully or
//! returns a [`StoreError`] with the store left untouched.

use shared::{
    domain::{Dialog, Recipe, RecipeId, SaveMode, ViewState},
    error::StoreError,
    protocol::RecipeSummary,
};
use tracing::{debug, warn};

mod dispatch;
pub mod ingredients;

pub use dispatch::dispatch;

#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredRecipe {
    id: RecipeId,
    recipe: Recipe,
}

#[derive(Debug, Clone)]
pub struct RecipeStore {
    recipes: Vec<StoredRecipe>,
    draft: Recipe,
    view: ViewState,
    save_mode: SaveMode,
    next_id: u64,
}

/// Result of [`RecipeStore::commit_draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Appended { index: usize, id: RecipeId },
    Updated { index: usize, id: RecipeId },
}

pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("Cookies", ["chocolate chips", "flour", "eggs"]),
        Recipe::new("BBQ Chicken", ["chicken", "bbq sauce", "crockpot"]),
        Recipe::new("Healthy Pancakes", ["oats", "egg whites", "greek yogurt"]),
    ]
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self::new(SaveMode::default())
    }
}

impl RecipeStore {
    pub fn new(save_mode: SaveMode) -> Self {
        Self {
            recipes: Vec::new(),
            draft: Recipe::default(),
            view: ViewState::default(),
            save_mode,
            next_id: 1,
        }
    }

    pub fn with_recipes(save_mode: SaveMode, recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut store = Self::new(save_mode);
        for recipe in recipes {
            store.push(recipe);
        }
        store
    }

    /// Store holding the three sample recipes the app starts with.
    pub fn seeded(save_mode: SaveMode) -> Self {
        Self::with_recipes(save_mode, sample_recipes())
    }

    pub fn save_mode(&self) -> SaveMode {
        self.save_mode
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn list(&self) -> impl ExactSizeIterator<Item = &Recipe> + '_ {
        self.recipes.iter().map(|stored| &stored.recipe)
    }

    pub fn summaries(&self) -> Vec<RecipeSummary> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(index, stored)| RecipeSummary {
                index,
                id: stored.id,
                recipe: stored.recipe.clone(),
            })
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index).map(|stored| &stored.recipe)
    }

    pub fn id_at(&self, index: usize) -> Option<RecipeId> {
        self.recipes.get(index).map(|stored| stored.id)
    }

    pub fn index_of(&self, id: RecipeId) -> Option<usize> {
        self.recipes.iter().position(|stored| stored.id == id)
    }

    pub fn draft(&self) -> &Recipe {
        &self.draft
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Current position of the record the dialogs target, if it still exists.
    pub fn active_index(&self) -> Option<usize> {
        self.view.active.and_then(|id| self.index_of(id))
    }

    /// Record the open edit dialog works on. `None` when the edit dialog is
    /// closed or its record has been removed.
    pub fn edit_target(&self) -> Option<(usize, &Recipe)> {
        if !self.view.edit_dialog_open {
            return None;
        }
        let index = self.active_index()?;
        self.get(index).map(|recipe| (index, recipe))
    }

    pub fn remove(&mut self, index: usize) -> Result<(RecipeId, Recipe), StoreError> {
        self.check_index(index, "remove")?;
        let removed = self.recipes.remove(index);
        debug!(index, id = %removed.id, remaining = self.recipes.len(), "removed recipe");
        Ok((removed.id, removed.recipe))
    }

    pub fn set_draft(&mut self, name: impl Into<String>, ingredients: Vec<String>) {
        self.draft = Recipe {
            name: name.into(),
            ingredients,
        };
        debug!(
            name = %self.draft.name,
            ingredients = self.draft.ingredients.len(),
            "updated draft"
        );
    }

    /// Commits the draft, resets it and closes the open dialog.
    ///
    /// With [`SaveMode::InPlace`] a save from the edit dialog (add dialog not
    /// open) overwrites the targeted record; every other case appends.
    pub fn commit_draft(&mut self) -> Result<Commit, StoreError> {
        let editing = self.view.edit_dialog_open && !self.view.add_dialog_open;
        let commit = match (self.save_mode, editing, self.view.active) {
            (SaveMode::InPlace, true, Some(id)) => {
                let Some(index) = self.index_of(id) else {
                    warn!(id = %id, "edit target vanished before save");
                    return Err(StoreError::StaleEditTarget { id });
                };
                self.recipes[index].recipe = std::mem::take(&mut self.draft);
                debug!(index, id = %id, "saved draft over edit target");
                Commit::Updated { index, id }
            }
            _ => {
                let recipe = std::mem::take(&mut self.draft);
                let id = self.push(recipe);
                let index = self.recipes.len() - 1;
                debug!(index, id = %id, "appended draft");
                Commit::Appended { index, id }
            }
        };
        self.close();
        Ok(commit)
    }

    pub fn rename_at(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<RecipeId, StoreError> {
        self.check_index(index, "rename_at")?;
        let name = name.into();
        let id = self.recipes[index].id;
        if self.is_loaded_edit_target(id) {
            self.draft.name = name.clone();
        }
        self.recipes[index].recipe.name = name;
        debug!(index, id = %id, "renamed recipe");
        Ok(id)
    }

    pub fn set_ingredients_at(
        &mut self,
        index: usize,
        ingredients: Vec<String>,
    ) -> Result<RecipeId, StoreError> {
        self.check_index(index, "set_ingredients_at")?;
        let id = self.recipes[index].id;
        if self.is_loaded_edit_target(id) {
            self.draft.ingredients = ingredients.clone();
        }
        self.recipes[index].recipe.ingredients = ingredients;
        debug!(index, id = %id, "replaced recipe ingredients");
        Ok(id)
    }

    /// Opens `dialog` aimed at `index`. The edit dialog needs a real record;
    /// the add dialog accepts any index and just records whatever it names.
    pub fn open(&mut self, dialog: Dialog, index: usize) -> Result<Option<RecipeId>, StoreError> {
        let target = match dialog {
            Dialog::Edit => {
                self.check_index(index, "open edit")?;
                self.id_at(index)
            }
            Dialog::Add => self.id_at(index),
        };

        match dialog {
            Dialog::Add => self.view.add_dialog_open = true,
            Dialog::Edit => self.view.edit_dialog_open = true,
        }
        self.view.active = target;

        if dialog == Dialog::Edit && self.save_mode == SaveMode::InPlace {
            self.draft = self.recipes[index].recipe.clone();
        }
        debug!(dialog = dialog.as_str(), index, "opened dialog");
        Ok(target)
    }

    /// Closes the add dialog if open, otherwise the edit dialog. Returns the
    /// one that was closed. In [`SaveMode::InPlace`] closing the edit dialog
    /// also drops the copy of the record it loaded into the draft.
    pub fn close(&mut self) -> Option<Dialog> {
        let closed = if self.view.add_dialog_open {
            self.view.add_dialog_open = false;
            Some(Dialog::Add)
        } else if self.view.edit_dialog_open {
            self.view.edit_dialog_open = false;
            if self.save_mode == SaveMode::InPlace {
                self.draft = Recipe::default();
            }
            Some(Dialog::Edit)
        } else {
            None
        };
        if let Some(dialog) = closed {
            debug!(dialog = dialog.as_str(), "closed dialog");
        }
        closed
    }

    /// True when `id` is the record an in-place edit dialog has loaded into
    /// the draft, so per-field edits to it must land in the draft too.
    fn is_loaded_edit_target(&self, id: RecipeId) -> bool {
        self.save_mode == SaveMode::InPlace
            && self.view.edit_dialog_open
            && !self.view.add_dialog_open
            && self.view.active == Some(id)
    }

    fn push(&mut self, recipe: Recipe) -> RecipeId {
        let id = RecipeId(self.next_id);
        self.next_id += 1;
        self.recipes.push(StoredRecipe { id, recipe });
        id
    }

    fn check_index(&self, index: usize, operation: &'static str) -> Result<(), StoreError> {
        let len = self.recipes.len();
        if index < len {
            Ok(())
        } else {
            warn!(operation, index, len, "rejected out-of-range recipe index");
            Err(StoreError::IndexOutOfRange { index, len })
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
