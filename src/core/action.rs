//! # Actions
//!
//! Everything that can happen in tick becomes an `Action`.
//! Dialog confirmed? That's `Action::Add(text)`.
//! Row clicked? That's `Action::Toggle(id)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` telling the caller what
//! to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! The `Effect::Redraw` return value is the explicit "changed" signal:
//! the presentation layer redraws before the next user event is
//! interpreted, so indices derived at render time are never stale.

use log::debug;

use crate::core::state::{App, TaskId};

/// Every state mutation the UI can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new task with the given name (from the add dialog).
    Add(String),
    /// Flip the done flag on a task.
    Toggle(TaskId),
    /// Remove a task.
    Delete(TaskId),
    /// Exit the application.
    Quit,
}

/// What the caller should do after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// State changed; redraw before handling the next event.
    Redraw,
    Quit,
}

/// The single mutation entry point. All add/toggle/delete flows in the
/// UI funnel through here.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Add(name) => {
            app.tasks.add(name.clone());
            app.status_message = format!("Added \"{}\"", name);
            Effect::Redraw
        }
        Action::Toggle(id) => {
            if app.tasks.toggle(id) {
                if let Some(task) = app.tasks.get(id) {
                    app.status_message = if task.done {
                        format!("Done: \"{}\"", task.name)
                    } else {
                        format!("Reopened: \"{}\"", task.name)
                    };
                }
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Delete(id) => {
            let name = app.tasks.get(id).map(|t| t.name.clone());
            if app.tasks.remove(id) {
                app.status_message = match name {
                    Some(name) => format!("Deleted \"{}\"", name),
                    None => String::from("Deleted task"),
                };
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new("Todo List".to_string())
    }

    #[test]
    fn test_scenario_add_buy_milk() {
        // empty → add "Buy milk" → [("Buy milk", false)]
        let mut app = test_app();
        let effect = update(&mut app, Action::Add("Buy milk".to_string()));
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(app.tasks.len(), 1);
        let task = app.tasks.iter().next().unwrap();
        assert_eq!(task.name, "Buy milk");
        assert!(!task.done);
        assert_eq!(app.status_message, "Added \"Buy milk\"");
    }

    #[test]
    fn test_scenario_toggle_first() {
        // [("Buy milk", false)] → toggle position 0 → [("Buy milk", true)]
        let mut app = test_app();
        update(&mut app, Action::Add("Buy milk".to_string()));
        let id = app.tasks.iter().next().unwrap().id;

        let effect = update(&mut app, Action::Toggle(id));
        assert_eq!(effect, Effect::Redraw);
        assert!(app.tasks.iter().next().unwrap().done);
        assert_eq!(app.status_message, "Done: \"Buy milk\"");

        let effect = update(&mut app, Action::Toggle(id));
        assert_eq!(effect, Effect::Redraw);
        assert!(!app.tasks.iter().next().unwrap().done);
        assert_eq!(app.status_message, "Reopened: \"Buy milk\"");
    }

    #[test]
    fn test_scenario_delete_first_of_two() {
        // [("Buy milk", true), ("Walk dog", false)] → delete position 0
        // → [("Walk dog", false)]
        let mut app = test_app();
        update(&mut app, Action::Add("Buy milk".to_string()));
        update(&mut app, Action::Add("Walk dog".to_string()));
        let first = app.tasks.iter().next().unwrap().id;
        update(&mut app, Action::Toggle(first));

        let effect = update(&mut app, Action::Delete(first));
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(app.tasks.len(), 1);
        let remaining = app.tasks.iter().next().unwrap();
        assert_eq!(remaining.name, "Walk dog");
        assert!(!remaining.done);
    }

    #[test]
    fn test_stale_id_produces_no_effect() {
        let mut app = test_app();
        update(&mut app, Action::Add("Buy milk".to_string()));
        let id = app.tasks.iter().next().unwrap().id;
        update(&mut app, Action::Delete(id));

        assert_eq!(update(&mut app, Action::Toggle(id)), Effect::None);
        assert_eq!(update(&mut app, Action::Delete(id)), Effect::None);
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut app = test_app();
        update(&mut app, Action::Add("same".to_string()));
        update(&mut app, Action::Add("same".to_string()));
        assert_eq!(app.tasks.len(), 2);
        let ids: Vec<_> = app.tasks.iter().map(|t| t.id).collect();
        assert_ne!(ids[0], ids[1]);
    }
}
