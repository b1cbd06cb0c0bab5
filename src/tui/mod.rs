//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw: it sleeps in `poll` for up
//! to 500ms and only draws when an event arrived. All pending events
//! are drained before the next draw, and every mutation goes through
//! `core::action::update` before the loop polls again - so the frame
//! on screen always reflects the store before the next event is
//! interpreted, and row indices derived at render time are never
//! stale.
//!
//! ## Modality
//!
//! `TuiState.add_dialog` is the dialog's state machine: `None` is
//! Closed, `Some` is Open. While open, every event routes to the
//! dialog and nothing reaches the list underneath.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AddDialogEvent, AddDialogState, TaskListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic).
pub struct TuiState {
    /// Selection and scroll for the task list.
    pub task_list: TaskListState,
    /// Add dialog overlay (None = closed).
    pub add_dialog: Option<AddDialogState>,
    /// Whether the key-hint footer is shown (config).
    pub show_footer: bool,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            task_list: TaskListState::new(),
            add_dialog: None,
            show_footer: config.show_footer,
        }
    }

    #[cfg(test)]
    pub fn for_test() -> Self {
        Self::new(&ResolvedConfig::default())
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture gives us click-to-toggle and click-to-delete.
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        // Selection may have been invalidated by a delete
        tui.task_list.clamp(app.tasks.len());

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the add dialog is open, route all events to it (modal)
            if let Some(ref mut dialog) = tui.add_dialog {
                if let Some(dialog_event) = dialog.handle_event(&event) {
                    match dialog_event {
                        AddDialogEvent::Confirm(text) => {
                            if update(&mut app, Action::Add(text)) == Effect::Quit {
                                should_quit = true;
                            }
                            tui.add_dialog = None;
                            // Land the selection on the task just added
                            tui.task_list.select_last(app.tasks.len());
                        }
                        AddDialogEvent::Dismiss => {
                            tui.add_dialog = None;
                        }
                    }
                }
                continue;
            }

            // Mouse hover moves the selection
            if let TuiEvent::MouseMove(_col, row) = event {
                let frame_area = terminal.get_frame().area();
                let (_, list_area, _) = ui::layout_areas(frame_area, tui.show_footer);
                if let Some(index) = ui::hit_test_row(
                    row,
                    list_area,
                    tui.task_list.scroll_offset(),
                    app.tasks.len(),
                ) {
                    tui.task_list.select(Some(index));
                }
                continue;
            }

            // Mouse click: the delete zone removes the row, anywhere
            // else on the row toggles it
            if let TuiEvent::MouseClick(col, row) = event {
                let frame_area = terminal.get_frame().area();
                let (_, list_area, _) = ui::layout_areas(frame_area, tui.show_footer);
                if let Some(index) = ui::hit_test_row(
                    row,
                    list_area,
                    tui.task_list.scroll_offset(),
                    app.tasks.len(),
                ) {
                    tui.task_list.select(Some(index));
                    let id = app.tasks.as_slice()[index].id;
                    let action = if ui::in_delete_zone(col, list_area) {
                        Action::Delete(id)
                    } else {
                        Action::Toggle(id)
                    };
                    if update(&mut app, action) == Effect::Quit {
                        should_quit = true;
                    }
                }
                continue;
            }

            // Keyboard, list mode
            match event {
                TuiEvent::Escape | TuiEvent::InputChar('q') => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::InputChar('a') => {
                    tui.add_dialog = Some(AddDialogState::new());
                }
                TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                    tui.task_list.select_up(app.tasks.len());
                }
                TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                    tui.task_list.select_down(app.tasks.len());
                }
                TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                    if let Some(id) = selected_id(&app, &tui) {
                        if update(&mut app, Action::Toggle(id)) == Effect::Quit {
                            should_quit = true;
                        }
                    }
                }
                TuiEvent::InputChar('d') | TuiEvent::Delete => {
                    if let Some(id) = selected_id(&app, &tui) {
                        if update(&mut app, Action::Delete(id)) == Effect::Quit {
                            should_quit = true;
                        }
                        tui.task_list.clamp(app.tasks.len());
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Id of the currently selected row, derived from the current store
/// snapshot (never cached across mutations).
fn selected_id(app: &App, tui: &TuiState) -> Option<crate::core::state::TaskId> {
    tui.task_list
        .selected()
        .and_then(|index| app.tasks.as_slice().get(index))
        .map(|task| task.id)
}
