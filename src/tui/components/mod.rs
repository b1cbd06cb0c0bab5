//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, both from the same playbook:
//!
//! - **Stateless (props-based)**: receive all data as parameters and
//!   just draw. `TitleBar`, and the row renderer in `task_row`.
//! - **Stateful (event-driven)**: keep persistent state in `TuiState`
//!   and get wrapped by a transient render struct each frame.
//!   `TaskListState`/`TaskListView` and `AddDialogState`/`AddDialog`.
//!
//! Components receive external data as props, never by reaching into
//! global state, which keeps dependencies explicit and each file
//! testable on a `TestBackend` in isolation.

pub mod add_dialog;
pub mod task_list;
pub mod task_row;
pub mod title_bar;

pub use add_dialog::{AddDialog, AddDialogEvent, AddDialogState};
pub use task_list::{TaskListState, TaskListView};
pub use title_bar::TitleBar;
