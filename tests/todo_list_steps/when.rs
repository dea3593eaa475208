//! When steps for to-do list BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::when;
use todolist::todo::services::AddTodoRequest;

#[when(r#"the user adds "{name}" due "{due}""#)]
fn user_adds(world: &mut TodoWorld, name: String, due: String) {
    world.submit(AddTodoRequest::from_form(name, due));
}

#[when(r#"the user adds an unnamed item due "{due}""#)]
fn user_adds_unnamed(world: &mut TodoWorld, due: String) {
    world.submit(AddTodoRequest::from_form("", due));
}

#[when(r#"the user adds "{name}" with no due date"#)]
fn user_adds_without_date(world: &mut TodoWorld, name: String) {
    world.submit(AddTodoRequest::without_due_date(name));
}

#[when(r#"the user deletes "{name}""#)]
fn user_deletes(world: &mut TodoWorld, name: String) -> Result<(), eyre::Report> {
    let id = world
        .manager
        .find_by_name(&name)
        .map(todolist::todo::domain::TodoItem::id)
        .ok_or_else(|| eyre::eyre!("no item named '{name}' to delete"))?;
    if world.manager.remove(id).is_none() {
        return Err(eyre::eyre!("delete of '{name}' removed nothing"));
    }
    Ok(())
}
