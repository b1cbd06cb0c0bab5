use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::task_row::DELETE_ZONE_WIDTH;
use crate::tui::components::{AddDialog, TaskListView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Root view: title bar, task list (or empty-state placeholder),
/// optional footer with key hints, and the add dialog drawn last so it
/// overlays everything.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let (title_area, list_area, footer_area) = layout_areas(frame.area(), tui.show_footer);

    let mut title_bar = TitleBar::new(
        app.title.clone(),
        app.tasks.open_count(),
        app.tasks.len(),
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    if app.tasks.is_empty() {
        draw_empty_view(frame, list_area);
    } else {
        let mut list = TaskListView::new(&mut tui.task_list, app.tasks.as_slice());
        list.render(frame, list_area);
    }

    if let Some(footer_area) = footer_area {
        let hints = Paragraph::new(" a Add   Space/Enter Toggle   d Delete   q Quit ")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, footer_area);
    }

    // Modal overlay last, over a cleared region
    if let Some(ref dialog) = tui.add_dialog {
        let area = frame.area();
        AddDialog::new(dialog).render(frame, area);
    }
}

fn draw_empty_view(frame: &mut Frame, area: Rect) {
    let placeholder = Paragraph::new("No tasks yet. Press a to add one.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    // Vertically center the single line
    let [centered] = Layout::vertical([Constraint::Length(1)])
        .flex(ratatui::layout::Flex::Center)
        .areas(area);
    frame.render_widget(placeholder, centered);
}

/// Screen layout shared by rendering and mouse hit-testing, so the two
/// can never disagree about where the list is.
pub fn layout_areas(frame_area: Rect, show_footer: bool) -> (Rect, Rect, Option<Rect>) {
    use Constraint::{Length, Min};
    if show_footer {
        let [title, list, footer] =
            Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area);
        (title, list, Some(footer))
    } else {
        let [title, list] = Layout::vertical([Length(1), Min(0)]).areas(frame_area);
        (title, list, None)
    }
}

/// Hit test: map a screen row to a task index, accounting for list
/// scroll. Each task renders as exactly one line.
pub fn hit_test_row(
    screen_y: u16,
    list_area: Rect,
    scroll_offset: usize,
    len: usize,
) -> Option<usize> {
    if screen_y < list_area.y || screen_y >= list_area.y + list_area.height {
        return None;
    }
    let index = (screen_y - list_area.y) as usize + scroll_offset;
    (index < len).then_some(index)
}

/// Whether a click column falls in the trailing delete-control zone.
pub fn in_delete_zone(screen_x: u16, list_area: Rect) -> bool {
    screen_x >= list_area.right().saturating_sub(DELETE_ZONE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_empty_list() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new("Todo List".to_string());
        let mut tui = TuiState::for_test();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Todo List"));
        assert!(text.contains("No tasks yet"));
        assert!(text.contains("q Quit"));
    }

    #[test]
    fn test_draw_ui_with_tasks() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new("Todo List".to_string());
        update(&mut app, Action::Add("Buy milk".to_string()));
        update(&mut app, Action::Add("Walk dog".to_string()));
        let mut tui = TuiState::for_test();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Walk dog"));
        assert!(!text.contains("No tasks yet"));
    }

    #[test]
    fn test_draw_ui_with_dialog_overlay() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new("Todo List".to_string());
        let mut tui = TuiState::for_test();
        tui.add_dialog = Some(crate::tui::components::AddDialogState::new());

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("New Task"));
    }

    #[test]
    fn test_hit_test_row_maps_screen_to_index() {
        let list_area = Rect::new(0, 1, 80, 10);
        assert_eq!(hit_test_row(1, list_area, 0, 3), Some(0));
        assert_eq!(hit_test_row(3, list_area, 0, 3), Some(2));
        // Below the last task
        assert_eq!(hit_test_row(4, list_area, 0, 3), None);
        // On the title bar
        assert_eq!(hit_test_row(0, list_area, 0, 3), None);
        // Scrolled down by two rows
        assert_eq!(hit_test_row(1, list_area, 2, 5), Some(2));
    }

    #[test]
    fn test_delete_zone_is_right_edge() {
        let list_area = Rect::new(0, 1, 80, 10);
        assert!(in_delete_zone(79, list_area));
        assert!(in_delete_zone(77, list_area));
        assert!(!in_delete_zone(76, list_area));
        assert!(!in_delete_zone(0, list_area));
    }

    #[test]
    fn test_layout_without_footer() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let (_, list, footer) = layout_areas(frame_area, false);
        assert!(footer.is_none());
        assert_eq!(list.height, 23);
    }
}
