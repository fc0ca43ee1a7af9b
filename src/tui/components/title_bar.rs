//! # TitleBar Component
//!
//! Top status bar: progress counter plus the latest status or error.
//!
//! Stateless. It receives all data as props and renders what it is given:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     done: app.store.done_count(),
//!     total: app.store.len(),
//!     status_message: app.status_message.clone(),
//!     error: app.error.clone(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! An error, when present, replaces the status message and is drawn in red.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub done: usize,
    pub total: usize,
    pub status_message: String,
    pub error: Option<String>,
}

impl TitleBar {
    fn heading(&self) -> String {
        format!("To-Do ({}/{} done)", self.done, self.total)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        match &self.error {
            Some(error) => {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
            }
            None if !self.status_message.is_empty() => {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    self.status_message.as_str(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            None => {}
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut bar: TitleBar) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_counter_and_status() {
        let text = rendered(TitleBar {
            done: 1,
            total: 4,
            status_message: "Item 1 done".to_string(),
            error: None,
        });
        assert!(text.starts_with("To-Do (1/4 done) | Item 1 done"));
    }

    #[test]
    fn test_error_replaces_status() {
        let text = rendered(TitleBar {
            done: 0,
            total: 0,
            status_message: "hidden".to_string(),
            error: Some("index 3 out of range".to_string()),
        });
        assert!(text.contains("index 3 out of range"));
        assert!(!text.contains("hidden"));
    }
}
