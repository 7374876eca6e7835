//! Given steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::given;
use taskboard::board::services::CreateTaskRequest;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.session.tasks().is_empty(), "board is not empty");
    Ok(())
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .session
        .create(CreateTaskRequest::new(title.as_str()))
        .ok_or_else(|| eyre::eyre!("task '{title}' was not created"))?;
    world.ids_by_title.insert(title, id);
    Ok(())
}

#[given("the add-task form is open")]
fn form_is_open(world: &mut BoardWorld) {
    world.session.begin_draft();
}
