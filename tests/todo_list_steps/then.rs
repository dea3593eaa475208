//! Then steps for to-do list BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::then;
use todolist::todo::view::TodoCard;

fn card_named(world: &TodoWorld, name: &str) -> Result<TodoCard, eyre::Report> {
    world
        .rendered()
        .cards()
        .iter()
        .find(|card| card.name == name)
        .cloned()
        .ok_or_else(|| eyre::eyre!("expected a card named '{name}'"))
}

#[then("the list shows {count:usize} item")]
fn list_shows_count(world: &TodoWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.rendered().cards().len();
    if shown != count {
        return Err(eyre::eyre!("expected {count} cards, found {shown}"));
    }
    Ok(())
}

#[then(r#"the item "{name}" is due "{due}""#)]
fn item_is_due(world: &TodoWorld, name: String, due: String) -> Result<(), eyre::Report> {
    let card = card_named(world, &name)?;
    if card.due_date != due {
        return Err(eyre::eyre!(
            "expected '{name}' due {due}, found {}",
            card.due_date
        ));
    }
    Ok(())
}

#[then(r#"the placeholder "{message}" is shown"#)]
fn placeholder_shown(world: &TodoWorld, message: String) -> Result<(), eyre::Report> {
    let view = world.rendered();
    if !world.manager.is_empty() {
        return Err(eyre::eyre!("expected the list to be empty, got {view:?}"));
    }
    match view {
        todolist::todo::view::TodoListView::Placeholder { message: shown } if shown == message => {
            Ok(())
        }
        other => Err(eyre::eyre!("expected placeholder '{message}', got {other:?}")),
    }
}

#[then(r#"the card "{name}" has background "{color}""#)]
fn card_has_background(world: &TodoWorld, name: String, color: String) -> Result<(), eyre::Report> {
    let card = card_named(world, &name)?;
    let shown = card.background.map(|c| c.to_string());
    if shown.as_deref() != Some(color.as_str()) {
        return Err(eyre::eyre!(
            "expected '{name}' background {color}, found {shown:?}"
        ));
    }
    Ok(())
}

#[then(r#"the card "{name}" has the default background"#)]
fn card_has_default_background(world: &TodoWorld, name: String) -> Result<(), eyre::Report> {
    let card = card_named(world, &name)?;
    if let Some(background) = card.background {
        return Err(eyre::eyre!(
            "expected '{name}' to keep the default background, found {background}"
        ));
    }
    Ok(())
}

#[then("the addition is declined")]
fn addition_declined(world: &TodoWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;
    if let Ok(item) = result {
        return Err(eyre::eyre!("expected the addition to be declined, added {item:?}"));
    }
    Ok(())
}
