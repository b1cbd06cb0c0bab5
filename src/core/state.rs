//! # Application State
//!
//! Core business state for tick. This module contains domain logic only -
//! no TUI-specific types. Presentation state (selection, dialog buffer)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── tasks: TaskList         // ordered store, single source of truth
//! ├── title: String           // application title (config)
//! └── status_message: String  // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use log::warn;

/// Stable opaque identifier for a task.
///
/// Ids are assigned by a monotonically increasing counter and never
/// reused, so a `TaskId` stays valid across deletions of other tasks.
/// Display position is derived fresh from the store at render time and
/// is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// One to-do entry. `name` is immutable after creation; `done` flips
/// via [`TaskList::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub done: bool,
}

/// Ordered in-memory collection of tasks. Insertion order is display
/// order; there is no reordering operation. Lives only for the process
/// lifetime - nothing is persisted.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task with `done = false` and return its id.
    ///
    /// The store performs no validation: whatever string is passed is
    /// stored as-is. The add dialog is responsible for skipping blank
    /// submissions.
    pub fn add(&mut self, name: impl Into<String>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            name: name.into(),
            done: false,
        });
        id
    }

    /// Flip `done` on the task with the given id.
    ///
    /// Returns `false` (and logs) if the id is no longer in the store.
    /// The UI derives ids from the current snapshot each frame, so a
    /// stale id here is a logic error, not a user error.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                true
            }
            None => {
                warn!("toggle on stale task id {:?}, ignoring", id);
                false
            }
        }
    }

    /// Remove the task with the given id. Same stale-id policy as
    /// [`toggle`](Self::toggle).
    pub fn remove(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => {
                warn!("remove on stale task id {:?}, ignoring", id);
                false
            }
        }
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks not yet checked off.
    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }
}

pub struct App {
    pub tasks: TaskList,
    pub title: String,
    pub status_message: String,
}

impl App {
    pub fn new(title: String) -> Self {
        Self {
            tasks: TaskList::new(),
            title,
            status_message: String::from("Press a to add a task"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.title.clone())
    }
}
