//! In-memory integration tests for task board lifecycle operations.

use super::helpers::{column_ids, create_task, session, task_ids};
use mockable::DefaultClock;
use rstest::rstest;
use taskboard::board::{
    domain::{TaskId, TaskPatch, TaskPriority, TaskStatus},
    services::CreateTaskRequest,
    session::BoardSession,
};

type Session = BoardSession<DefaultClock>;

#[rstest]
fn create_from_empty_board(mut session: Session) -> Result<(), eyre::Report> {
    session
        .create(
            CreateTaskRequest::new("Design Homepage")
                .with_description("Create wireframes and mockups")
                .with_priority(TaskPriority::High),
        )
        .ok_or_else(|| eyre::eyre!("task was not created"))?;

    let tasks = session.tasks();
    eyre::ensure!(tasks.len() == 1, "expected one task, found {}", tasks.len());
    let task = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.status() == TaskStatus::Todo, "new task not in todo");
    eyre::ensure!(task.priority() == TaskPriority::High, "priority mismatch");
    Ok(())
}

#[rstest]
fn blank_title_leaves_board_empty(mut session: Session) {
    let result = session.create(
        CreateTaskRequest::new("")
            .with_description("desc")
            .with_priority(TaskPriority::Low),
    );

    assert!(result.is_none());
    assert!(session.tasks().is_empty());
}

#[rstest]
fn moved_task_changes_column(mut session: Session) -> Result<(), eyre::Report> {
    let id = create_task(&mut session, "Ship release")?;

    session
        .move_task(id, TaskStatus::Done)
        .ok_or_else(|| eyre::eyre!("task was not moved"))?;

    eyre::ensure!(
        !column_ids(&session, TaskStatus::Todo).contains(&id),
        "task still in todo"
    );
    eyre::ensure!(
        column_ids(&session, TaskStatus::Done).contains(&id),
        "task missing from done"
    );
    Ok(())
}

#[rstest]
fn list_order_survives_moves(mut session: Session) -> Result<(), eyre::Report> {
    let first = create_task(&mut session, "A")?;
    let second = create_task(&mut session, "B")?;
    eyre::ensure!(task_ids(session.tasks()) == vec![first, second], "order");

    session.move_task(first, TaskStatus::InProgress);

    eyre::ensure!(
        task_ids(session.tasks()) == vec![first, second],
        "order changed after move"
    );
    Ok(())
}

#[rstest]
fn unknown_delete_is_harmless(mut session: Session) -> Result<(), eyre::Report> {
    create_task(&mut session, "A")?;
    create_task(&mut session, "B")?;
    let before = session.tasks().to_vec();

    eyre::ensure!(session.delete(TaskId::new()).is_none(), "unexpected removal");
    eyre::ensure!(session.tasks() == before.as_slice(), "tasks changed");
    Ok(())
}

#[rstest]
fn columns_partition_board_through_full_lifecycle(
    mut session: Session,
) -> Result<(), eyre::Report> {
    let ids = ["one", "two", "three", "four"]
        .into_iter()
        .map(|title| create_task(&mut session, title))
        .collect::<Result<Vec<_>, _>>()?;
    let [one, two, three, four] = ids.as_slice() else {
        eyre::bail!("expected four tasks");
    };

    session.move_task(*one, TaskStatus::Done);
    session.move_task(*two, TaskStatus::InProgress);
    session.update(*three, TaskPatch::new().with_status(TaskStatus::Done));
    session.delete(*four);

    let mut projected: Vec<TaskId> = TaskStatus::ALL
        .into_iter()
        .flat_map(|status| column_ids(&session, status))
        .collect();
    let mut listed = task_ids(session.tasks());
    projected.sort();
    listed.sort();
    eyre::ensure!(projected == listed, "projections do not cover the list");

    let counts: usize = session.counts().iter().map(|(_, count)| count).sum();
    eyre::ensure!(counts == session.tasks().len(), "counts do not add up");
    Ok(())
}

#[rstest]
fn edit_flow_updates_selected_task(mut session: Session) -> Result<(), eyre::Report> {
    let first = create_task(&mut session, "First")?;
    let second = create_task(&mut session, "Second")?;

    session.begin_edit(first);
    session.begin_edit(second);
    session
        .save_edit(TaskPatch::new().with_title("Second, revised"))
        .ok_or_else(|| eyre::eyre!("edit was not saved"))?;

    let titles: Vec<&str> = session
        .tasks()
        .iter()
        .map(|task| task.title().as_str())
        .collect();
    eyre::ensure!(
        titles == vec!["First", "Second, revised"],
        "unexpected titles {titles:?}"
    );
    eyre::ensure!(session.editing().is_none(), "still editing");
    Ok(())
}

#[rstest]
fn sample_board_snapshot_round_trips_to_json() -> Result<(), eyre::Report> {
    let session = BoardSession::with_sample_tasks();
    let json = session.snapshot().to_json()?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    let columns = value
        .get("columns")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| eyre::eyre!("snapshot has no columns"))?;
    eyre::ensure!(columns.len() == 3, "expected three columns");

    let counts: Vec<u64> = columns
        .iter()
        .filter_map(|column| column.get("count").and_then(serde_json::Value::as_u64))
        .collect();
    eyre::ensure!(counts == vec![2, 1, 2], "unexpected counts {counts:?}");
    Ok(())
}
