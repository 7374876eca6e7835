//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskboard::board::domain::{TaskPriority, TaskStatus};

#[then("the task count is {count:u64}")]
fn task_count_is(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = u64::try_from(world.session.tasks().len())?;
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"the task "{title}" is in "{status}" with priority "{priority}""#)]
fn task_has_status_and_priority(
    world: &BoardWorld,
    title: String,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let expected_priority = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;

    let task = world
        .session
        .task(world.id_of(&title)?)
        .ok_or_else(|| eyre::eyre!("task '{title}' missing from board"))?;

    eyre::ensure!(
        task.status() == expected_status,
        "expected status {expected_status}, found {}",
        task.status()
    );
    eyre::ensure!(
        task.priority() == expected_priority,
        "expected priority {expected_priority}, found {}",
        task.priority()
    );
    Ok(())
}

fn column_contains(world: &BoardWorld, status: &str, title: &str) -> Result<bool, eyre::Report> {
    let column = TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.id_of(title)?;
    Ok(world.session.project(column).any(|task| task.id() == id))
}

#[then(r#"the "{status}" column contains "{title}""#)]
fn column_has_task(world: &BoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        column_contains(world, &status, &title)?,
        "column '{status}' is missing '{title}'"
    );
    Ok(())
}

#[then(r#"the "{status}" column does not contain "{title}""#)]
fn column_lacks_task(world: &BoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !column_contains(world, &status, &title)?,
        "column '{status}' still holds '{title}'"
    );
    Ok(())
}

#[then(r#"the board lists "{titles}""#)]
fn board_lists(world: &BoardWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = world
        .session
        .tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("the add-task form is closed")]
fn form_is_closed(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.session.draft().is_none(), "add-task form is open");
    Ok(())
}

#[then("the add-task form remains open")]
fn form_remains_open(world: &BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.session.draft().is_some(), "add-task form is closed");
    Ok(())
}
