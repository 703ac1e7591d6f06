//! Line-oriented front end: turns typed lines into store commands and renders
//! the store after every event.

use std::io::Write;

use recipe_core::{
    ingredients::{format_ingredients, parse_ingredients},
    RecipeStore,
};
use shared::{
    domain::{Dialog, Recipe, SaveMode},
    protocol::{Command, StoreEvent},
};

pub const HELP: &str = "\
commands:
  list | ls                      show all recipes
  show <i>                       show one recipe
  add                            open the add dialog
  edit <i>                       open the edit dialog for recipe i
  name <text>                    set the draft name
  ingredients <a,b,c>            set the draft ingredients
  rename <i> <text>              rename recipe i
  set-ingredients <i> <a,b,c>    replace the ingredients of recipe i
  delete <i> | rm <i>            delete recipe i
  save                           commit the draft
  close                          close the open dialog
  help                           this text
  quit | exit                    leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Dispatch(Command),
    Show(usize),
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`. The store is read for
/// the half of the draft a `name`/`ingredients` line leaves unchanged.
pub fn parse_line(line: &str, store: &RecipeStore) -> Result<Option<ShellAction>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let action = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => ShellAction::Dispatch(Command::List),
        "show" => ShellAction::Show(parse_index(rest)?),
        "add" => ShellAction::Dispatch(Command::Open {
            dialog: Dialog::Add,
            index: store.active_index().unwrap_or(0),
        }),
        "edit" => ShellAction::Dispatch(Command::Open {
            dialog: Dialog::Edit,
            index: parse_index(rest)?,
        }),
        "name" => ShellAction::Dispatch(Command::SetDraft {
            name: rest.to_string(),
            ingredients: store.draft().ingredients.clone(),
        }),
        "ingredients" => ShellAction::Dispatch(Command::SetDraft {
            name: store.draft().name.clone(),
            ingredients: parse_ingredients(rest),
        }),
        "rename" => {
            let (index, name) = split_index(rest)?;
            ShellAction::Dispatch(Command::RenameAt {
                index,
                name: name.to_string(),
            })
        }
        "set-ingredients" => {
            let (index, text) = split_index(rest)?;
            ShellAction::Dispatch(Command::SetIngredientsAt {
                index,
                ingredients: parse_ingredients(text),
            })
        }
        "delete" | "rm" => ShellAction::Dispatch(Command::Remove {
            index: parse_index(rest)?,
        }),
        "save" => ShellAction::Dispatch(Command::CommitDraft),
        "close" => ShellAction::Dispatch(Command::Close),
        "help" | "?" => ShellAction::Help,
        "quit" | "exit" => ShellAction::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(action))
}

fn parse_index(raw: &str) -> Result<usize, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("missing recipe index".to_string());
    }
    raw.parse::<usize>()
        .map_err(|_| format!("invalid recipe index '{raw}'"))
}

fn split_index(rest: &str) -> Result<(usize, &str), String> {
    let (index, text) = match rest.split_once(char::is_whitespace) {
        Some((index, text)) => (index, text.trim_start()),
        None => (rest, ""),
    };
    Ok((parse_index(index)?, text))
}

pub fn render_recipe(out: &mut impl Write, index: usize, recipe: &Recipe) -> std::io::Result<()> {
    writeln!(out, "[{index}] {}", recipe.name)?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "      - {ingredient}")?;
    }
    Ok(())
}

/// Full re-render: the collection, then the open dialog (if any) with its form values.
pub fn render_store(out: &mut impl Write, store: &RecipeStore) -> std::io::Result<()> {
    if store.is_empty() {
        writeln!(out, "(no recipes)")?;
    }
    for (index, recipe) in store.list().enumerate() {
        render_recipe(out, index, recipe)?;
    }

    let view = store.view();
    if view.is_open(Dialog::Add) {
        let draft = store.draft();
        writeln!(
            out,
            "-- add recipe -- name: {:?} ingredients: {:?}",
            draft.name,
            format_ingredients(&draft.ingredients)
        )?;
    } else if view.is_open(Dialog::Edit) {
        match store.edit_target() {
            // `save` writes the draft back in place, so the form shows the draft.
            Some((index, recipe)) => {
                let form = match store.save_mode() {
                    SaveMode::InPlace => store.draft(),
                    SaveMode::Append => recipe,
                };
                writeln!(
                    out,
                    "-- edit recipe [{index}] -- name: {:?} ingredients: {:?}",
                    form.name,
                    format_ingredients(&form.ingredients)
                )?
            }
            None => writeln!(out, "-- edit recipe -- target was deleted; 'close' to dismiss")?,
        }
    }
    Ok(())
}

pub fn describe_event(event: &StoreEvent) -> String {
    match event {
        StoreEvent::Listed { recipes } => format!("{} recipe(s)", recipes.len()),
        StoreEvent::RecipeRemoved { index, recipe, .. } => {
            format!("deleted [{index}] {}", recipe.name)
        }
        StoreEvent::DraftUpdated { draft } => format!(
            "draft: {:?} [{}]",
            draft.name,
            format_ingredients(&draft.ingredients)
        ),
        StoreEvent::RecipeAdded { index, .. } => format!("added recipe at [{index}]"),
        StoreEvent::RecipeUpdated { index, .. } => format!("updated recipe [{index}]"),
        StoreEvent::DialogOpened { dialog, .. } => format!("opened {} dialog", dialog.as_str()),
        StoreEvent::DialogClosed { dialog: Some(dialog) } => {
            format!("closed {} dialog", dialog.as_str())
        }
        StoreEvent::DialogClosed { dialog: None } => "no dialog open".to_string(),
    }
}
