//! # TaskRow
//!
//! Renders one task as a single styled line: a leading avatar glyph
//! derived from the task name, the name itself (struck through and
//! dimmed when done), and a trailing delete control.
//!
//! Pure: a function of `(task, width)` with no state. Rows are rebuilt
//! from the store on every render, so nothing here survives a frame.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::Task;

/// The trailing delete control, right-aligned in every row.
pub const DELETE_CONTROL: &str = "✕";

/// Columns at the right edge of the list that count as the delete
/// control's click zone (the `✕` plus a space of padding either side).
pub const DELETE_ZONE_WIDTH: u16 = 3;

/// Leading avatar glyph: first character of the name, uppercased.
/// An empty name gets a `•` placeholder so the row still renders.
pub fn avatar_glyph(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('•')
}

/// Build the display line for one task, padded so the delete control
/// sits at the right edge of `width`.
pub fn task_line(task: &Task, width: u16) -> Line<'static> {
    let name_style = if task.done {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM)
    } else {
        Style::default()
    };

    let glyph = format!(" {} ", avatar_glyph(&task.name));
    // glyph + space + name + padding + " ✕ "
    let fixed = glyph.width() + 1 + DELETE_ZONE_WIDTH as usize;
    let name_width = (width as usize).saturating_sub(fixed);
    let name = truncate_to_width(&task.name, name_width);
    let padding = name_width.saturating_sub(name.width());

    Line::from(vec![
        Span::styled(glyph, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(name, name_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            format!(" {DELETE_CONTROL} "),
            Style::default().fg(Color::Red),
        ),
    ])
}

/// Truncate a string to at most `max_width` display columns, with a
/// trailing ellipsis when something was cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
