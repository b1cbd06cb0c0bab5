//! # Add-Task Dialog
//!
//! Modal overlay that captures a single line of text and emits it as a
//! `Confirm` event. The dialog is a two-state machine: `TuiState`
//! holds an `Option<AddDialogState>` where `None` is Closed and
//! `Some` is Open with the pending text.
//!
//! While open, the event loop routes every event here, so the list
//! underneath is inert (modal). The only exits are Enter with
//! non-blank text (confirm, exactly one add) and Esc (cancel, no add).
//! Blank submissions are ignored and the dialog stays open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Events emitted by the add dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDialogEvent {
    /// User pressed Enter with non-blank text. Carries the pending
    /// text; the dialog's buffer is already cleared.
    Confirm(String),
    /// User pressed Esc. Nothing is added.
    Dismiss,
}

/// Persistent state for the add dialog overlay: the pending text and
/// a byte-offset cursor into it.
#[derive(Default)]
pub struct AddDialogState {
    pub buffer: String,
    cursor: usize,
}

impl AddDialogState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for AddDialogState {
    type Event = AddDialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AddDialogEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
                None
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => {
                if self.buffer.trim().is_empty() {
                    // Blank submit: stay open, keep whatever whitespace
                    // is in the buffer.
                    None
                } else {
                    self.cursor = 0;
                    Some(AddDialogEvent::Confirm(std::mem::take(&mut self.buffer)))
                }
            }
            TuiEvent::Escape => Some(AddDialogEvent::Dismiss),
            // Clicks outside do not dismiss - the dialog is modal.
            _ => None,
        }
    }
}

/// Transient render wrapper for the add dialog overlay.
pub struct AddDialog<'a> {
    state: &'a AddDialogState,
}

impl<'a> AddDialog<'a> {
    pub fn new(state: &'a AddDialogState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_input_rect(area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " Enter Add  Esc Cancel ";

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" New Task ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let input = Paragraph::new(self.state.buffer.as_str())
            .style(Style::default().fg(Color::Green))
            .block(block);
        frame.render_widget(input, overlay);

        // Place the terminal cursor inside the field (border + padding = 2)
        let cursor_x = overlay.x + 2 + self.state.buffer[..self.state.cursor].width() as u16;
        frame.set_cursor_position((cursor_x.min(overlay.right().saturating_sub(3)), overlay.y + 1));
    }
}

/// Small centered rect for a single-line input field.
fn centered_input_rect(outer: Rect) -> Rect {
    let width = outer.width.saturating_sub(4).min(46);
    let [centered_v] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(outer);
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(centered_v);
    centered
}

fn prev_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index - 1;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
