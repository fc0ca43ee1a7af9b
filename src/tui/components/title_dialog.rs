//! # TitleDialog Component
//!
//! Modal prompt that collects a title for a new or edited item. The store
//! never asks for input itself; this dialog gathers the text and the event
//! loop turns the submission into an `Action`.
//!
//! Single-line editing with byte offsets kept on char boundaries. Pasted
//! newlines are flattened to spaces since rows are one line tall. The cursor
//! column is measured in display cells, so wide (CJK) characters place it
//! correctly.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Add,
    Edit(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    /// Enter pressed; carries the buffer as typed (possibly blank)
    Submit(String),
    Cancel,
    ContentChanged,
}

pub struct TitleDialog {
    pub kind: DialogKind,
    pub buffer: String,
    /// Byte offset into `buffer`
    cursor: usize,
}

impl TitleDialog {
    pub fn add() -> Self {
        Self {
            kind: DialogKind::Add,
            buffer: String::new(),
            cursor: 0,
        }
    }

    /// Prefilled with the current title, cursor at the end.
    pub fn edit(index: usize, current_title: &str) -> Self {
        Self {
            kind: DialogKind::Edit(index),
            buffer: current_title.to_string(),
            cursor: current_title.len(),
        }
    }

    fn heading(&self) -> &'static str {
        match self.kind {
            DialogKind::Add => " New To-Do ",
            DialogKind::Edit(_) => " Edit To-Do ",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self.kind {
            DialogKind::Add => "What needs doing?",
            DialogKind::Edit(_) => "Type a title",
        }
    }

    fn help(&self) -> &'static str {
        match self.kind {
            DialogKind::Add => " Enter Add  Esc Cancel ",
            DialogKind::Edit(_) => " Enter Save  Esc Cancel ",
        }
    }

    fn insert(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Tail of the buffer that keeps the cursor inside `width` cells, and the
    /// cursor's column within it.
    fn visible_window(&self, width: u16) -> (&str, u16) {
        let width = usize::from(width.max(1));
        let mut start = 0;
        while self.buffer[start..self.cursor].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        let column = self.buffer[start..self.cursor].width() as u16;
        (&self.buffer[start..], column)
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

impl EventHandler for TitleDialog {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DialogEvent> {
        match event {
            TuiEvent::Submit => Some(DialogEvent::Submit(self.buffer.clone())),
            TuiEvent::Escape => Some(DialogEvent::Cancel),
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert(c.encode_utf8(&mut utf8));
                Some(DialogEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flat = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
                self.insert(&flat);
                Some(DialogEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                DialogEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                DialogEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                DialogEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                DialogEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                DialogEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                DialogEvent::ContentChanged
            }),
            _ => None,
        }
    }
}

impl Component for TitleDialog {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [overlay] = Layout::vertical([Constraint::Length(DIALOG_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [overlay] = Layout::horizontal([Constraint::Length(DIALOG_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(overlay);

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(self.heading())
            .title_bottom(Line::from(self.help()).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [message_area, input_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new("Enter the content.").style(Style::default().fg(Color::Gray)),
            message_area,
        );

        if self.buffer.is_empty() {
            frame.render_widget(
                Paragraph::new(self.placeholder()).style(Style::default().fg(Color::DarkGray)),
                input_area,
            );
            frame.set_cursor_position((input_area.x, input_area.y));
            return;
        }

        let (visible, column) = self.visible_window(input_area.width);
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().fg(Color::Green)),
            input_area,
        );
        frame.set_cursor_position((input_area.x + column, input_area.y));
    }
}
