use shared::{
    error::StoreError,
    protocol::{Command, StoreEvent},
};
use tracing::debug;

use crate::{Commit, RecipeStore};

/// Applies one command to the store and reports what changed.
pub fn dispatch(store: &mut RecipeStore, command: Command) -> Result<StoreEvent, StoreError> {
    let command_name = command.name();
    let event = match command {
        Command::List => StoreEvent::Listed {
            recipes: store.summaries(),
        },
        Command::Remove { index } => {
            let (id, recipe) = store.remove(index)?;
            StoreEvent::RecipeRemoved { index, id, recipe }
        }
        Command::SetDraft { name, ingredients } => {
            store.set_draft(name, ingredients);
            StoreEvent::DraftUpdated {
                draft: store.draft().clone(),
            }
        }
        Command::CommitDraft => match store.commit_draft()? {
            Commit::Appended { index, id } => StoreEvent::RecipeAdded { index, id },
            Commit::Updated { index, id } => StoreEvent::RecipeUpdated { index, id },
        },
        Command::RenameAt { index, name } => {
            let id = store.rename_at(index, name)?;
            StoreEvent::RecipeUpdated { index, id }
        }
        Command::SetIngredientsAt { index, ingredients } => {
            let id = store.set_ingredients_at(index, ingredients)?;
            StoreEvent::RecipeUpdated { index, id }
        }
        Command::Open { dialog, index } => {
            let target = store.open(dialog, index)?;
            StoreEvent::DialogOpened { dialog, target }
        }
        Command::Close => StoreEvent::DialogClosed {
            dialog: store.close(),
        },
    };
    debug!(command = command_name, "applied store command");
    Ok(event)
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
