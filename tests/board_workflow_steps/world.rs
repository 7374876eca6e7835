//! Shared world state for task board BDD scenarios.

use std::collections::HashMap;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{domain::TaskId, session::BoardSession};

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub session: BoardSession<DefaultClock>,
    pub ids_by_title: HashMap<String, TaskId>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: BoardSession::new(),
            ids_by_title: HashMap::new(),
        }
    }

    /// Looks up the identifier of a task created in this scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if no task with `title` was created.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.ids_by_title
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
