//! # Task List Component
//!
//! Vertical scrollable list of task rows.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TaskListState` (selection + scroll) lives in `TuiState`
//! - `TaskListView` is created each frame with a fresh borrow of the
//!   store's tasks, so displayed rows always match the current store.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{List, ListItem, ListState};

use crate::core::state::Task;
use crate::tui::components::task_row::task_line;

/// Persistent selection and scroll state for the task list.
#[derive(Default)]
pub struct TaskListState {
    pub list_state: ListState,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    pub fn select_up(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let index = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        };
        self.list_state.select(Some(index));
    }

    pub fn select_down(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let index = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(index));
    }

    pub fn select_last(&mut self, len: usize) {
        self.list_state
            .select(if len == 0 { None } else { Some(len - 1) });
    }

    /// Keep the selection inside the list after a deletion.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// First visible row, for mapping mouse rows back to indices.
    pub fn scroll_offset(&self) -> usize {
        self.list_state.offset()
    }
}

/// Transient render wrapper borrowing the current store snapshot.
pub struct TaskListView<'a> {
    state: &'a mut TaskListState,
    tasks: &'a [Task],
}

impl<'a> TaskListView<'a> {
    pub fn new(state: &'a mut TaskListState, tasks: &'a [Task]) -> Self {
        Self { state, tasks }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .map(|task| ListItem::new(task_line(task, area.width)))
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::TaskList;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_selection_moves_within_bounds() {
        let mut state = TaskListState::new();
        state.select_down(3);
        assert_eq!(state.selected(), Some(0));
        state.select_down(3);
        state.select_down(3);
        state.select_down(3); // clamped at last row
        assert_eq!(state.selected(), Some(2));
        state.select_up(3);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_select_up_from_none_lands_on_last() {
        let mut state = TaskListState::new();
        state.select_up(3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_selection_on_empty_list_stays_none() {
        let mut state = TaskListState::new();
        state.select_down(0);
        assert_eq!(state.selected(), None);
        state.select_up(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut state = TaskListState::new();
        state.select(Some(2));
        state.clamp(2);
        assert_eq!(state.selected(), Some(1));
        state.clamp(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_render_shows_all_rows() {
        let mut tasks = TaskList::new();
        tasks.add("Buy milk");
        tasks.add("Walk dog");

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = TaskListState::new();

        terminal
            .draw(|f| {
                let mut view = TaskListView::new(&mut state, tasks.as_slice());
                view.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Walk dog"));
    }
}
