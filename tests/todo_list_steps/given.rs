//! Given steps for to-do list BDD scenarios.

use super::world::TodoWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::todo::services::AddTodoRequest;

#[given("an empty todo list")]
fn an_empty_list(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    if !world.manager.is_empty() {
        return Err(eyre::eyre!("expected a fresh list to be empty"));
    }
    Ok(())
}

#[given(r#"the user has added "{name}" due "{due}""#)]
fn user_has_added(world: &mut TodoWorld, name: String, due: String) -> Result<(), eyre::Report> {
    world
        .manager
        .add(AddTodoRequest::from_form(name, due))
        .wrap_err("add item for scenario setup")?;
    Ok(())
}
