use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{TitleBar, TodoList};

const KEY_HELP: &str = "a Add  Enter Edit  Space Done  d Delete  q Quit";
const CONFIRM_HELP: &str = "Press d again to delete | any other key cancels";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, list_area, help_area] = main_layout(frame.area());

    TitleBar {
        done: app.store.done_count(),
        total: app.store.len(),
        status_message: app.status_message.clone(),
        error: app.error.clone(),
    }
    .render(frame, title_area);

    TodoList::new(&mut tui.list, app.store.items(), tui.done_style).render(frame, list_area);

    let (help, style) = if tui.list.confirm_delete {
        (CONFIRM_HELP, Style::default().fg(Color::Red))
    } else {
        (KEY_HELP, Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Line::styled(help, style).centered(), help_area);

    // Modal overlay draws last so it sits on top
    if let Some(dialog) = tui.dialog.as_mut() {
        dialog.render(frame, frame.area());
    }
}

fn main_layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}
