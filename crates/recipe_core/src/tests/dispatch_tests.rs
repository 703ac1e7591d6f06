use shared::domain::{Dialog, Recipe, RecipeId, SaveMode};

use super::*;

#[test]
fn list_reports_every_recipe_with_index_and_id() {
    let mut store = RecipeStore::seeded(SaveMode::InPlace);
    let event = dispatch(&mut store, Command::List).expect("list");

    let StoreEvent::Listed { recipes } = event else {
        panic!("unexpected event: {event:?}");
    };
    assert_eq!(recipes.len(), 3);
    assert_eq!(recipes[2].index, 2);
    assert_eq!(recipes[2].id, RecipeId(3));
    assert_eq!(recipes[2].recipe.name, "Healthy Pancakes");
}

#[test]
fn add_flow_emits_open_draft_and_added_events() {
    let mut store = RecipeStore::seeded(SaveMode::InPlace);

    let opened = dispatch(
        &mut store,
        Command::Open {
            dialog: Dialog::Add,
            index: 0,
        },
    )
    .expect("open");
    assert_eq!(
        opened,
        StoreEvent::DialogOpened {
            dialog: Dialog::Add,
            target: Some(RecipeId(1)),
        }
    );

    let drafted = dispatch(
        &mut store,
        Command::SetDraft {
            name: "Tea".into(),
            ingredients: vec!["water".into(), "tea leaves".into()],
        },
    )
    .expect("draft");
    assert_eq!(
        drafted,
        StoreEvent::DraftUpdated {
            draft: Recipe::new("Tea", ["water", "tea leaves"]),
        }
    );

    let added = dispatch(&mut store, Command::CommitDraft).expect("commit");
    assert_eq!(
        added,
        StoreEvent::RecipeAdded {
            index: 3,
            id: RecipeId(4),
        }
    );
    assert!(!store.view().add_dialog_open);
}

#[test]
fn remove_event_carries_the_removed_recipe() {
    let mut store = RecipeStore::seeded(SaveMode::Append);
    let event = dispatch(&mut store, Command::Remove { index: 0 }).expect("remove");

    assert_eq!(
        event,
        StoreEvent::RecipeRemoved {
            index: 0,
            id: RecipeId(1),
            recipe: Recipe::new("Cookies", ["chocolate chips", "flour", "eggs"]),
        }
    );
}

#[test]
fn per_field_commands_report_updates() {
    let mut store = RecipeStore::seeded(SaveMode::Append);

    let renamed = dispatch(
        &mut store,
        Command::RenameAt {
            index: 1,
            name: "Smoked Chicken".into(),
        },
    )
    .expect("rename");
    assert_eq!(
        renamed,
        StoreEvent::RecipeUpdated {
            index: 1,
            id: RecipeId(2),
        }
    );

    dispatch(
        &mut store,
        Command::SetIngredientsAt {
            index: 1,
            ingredients: vec!["chicken".into()],
        },
    )
    .expect("set ingredients");
    assert_eq!(store.get(1), Some(&Recipe::new("Smoked Chicken", ["chicken"])));
}

#[test]
fn close_without_open_dialog_reports_nothing_closed() {
    let mut store = RecipeStore::default();
    let event = dispatch(&mut store, Command::Close).expect("close");
    assert_eq!(event, StoreEvent::DialogClosed { dialog: None });
}

#[test]
fn errors_propagate_from_store() {
    let mut store = RecipeStore::seeded(SaveMode::Append);
    let err = dispatch(
        &mut store,
        Command::Open {
            dialog: Dialog::Edit,
            index: 3,
        },
    )
    .expect_err("out of range");

    assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 3 });
}
