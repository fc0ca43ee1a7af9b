//! # TodoList Component
//!
//! The table of to-do rows: a switch column followed by the title.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TodoListState` lives in `TuiState` (selection, delete confirmation,
//!   last rendered area for hit testing)
//! - `TodoList` is created each frame with borrowed state and the items as props
//!
//! Completed rows get the configured highlight color and, unless disabled,
//! a strikethrough. Open rows are plain text.

use std::str::FromStr;

use log::warn;
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph};

use crate::core::action::Effect;
use crate::core::state::DoneStyle;
use crate::core::store::TodoItem;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const HIGHLIGHT_SYMBOL: &str = "> ";
const HIGHLIGHT_WIDTH: u16 = 2;
const SWITCH_WIDTH: u16 = 3;

/// Events emitted by the list, each one a user intent for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Add,
    Edit(usize),
    Toggle(usize),
    Delete(usize),
    Quit,
}

/// Persistent state for the list.
pub struct TodoListState {
    pub list_state: ListState,
    /// `d` was pressed once on the selected row
    pub confirm_delete: bool,
    /// Row count (Prop, synced from the store before each event batch)
    pub len: usize,
    /// Inner area from the last render
    inner_area: Rect,
}

impl TodoListState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            list_state,
            confirm_delete: false,
            len,
            inner_area: Rect::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected().filter(|&i| i < self.len)
    }

    /// Repair selection after the store changed.
    pub fn apply_effect(&mut self, effect: Effect, len: usize) {
        self.len = len;
        match effect {
            Effect::RemoveRow(removed) => {
                let selected = match self.list_state.selected() {
                    Some(sel) if sel > removed => Some(sel - 1),
                    other => other,
                };
                self.list_state.select(selected);
                self.clamp();
            }
            Effect::Reload => self.clamp(),
            Effect::None | Effect::Quit => {}
        }
    }

    fn clamp(&mut self) {
        if self.len == 0 {
            self.list_state.select(None);
        } else {
            let sel = self.list_state.selected().unwrap_or(0).min(self.len - 1);
            self.list_state.select(Some(sel));
        }
    }

    fn select_previous(&mut self) {
        if self.len > 0 {
            let sel = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
            self.list_state.select(Some(sel));
        }
    }

    fn select_next(&mut self) {
        if self.len > 0 {
            let sel = self.list_state.selected().map_or(0, |i| (i + 1).min(self.len - 1));
            self.list_state.select(Some(sel));
        }
    }

    /// Map a screen cell to `(row, on_switch)`.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(usize, bool)> {
        let area = self.inner_area;
        if !area.contains(Position { x: column, y: row }) {
            return None;
        }
        let index = self.list_state.offset() + usize::from(row - area.y);
        if index >= self.len {
            return None;
        }
        let switch_start = area.x + HIGHLIGHT_WIDTH;
        let on_switch = column >= switch_start && column < switch_start + SWITCH_WIDTH;
        Some((index, on_switch))
    }
}

impl EventHandler for TodoListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        // Any key other than a second `d` cancels a pending delete
        if !matches!(event, TuiEvent::InputChar('d')) {
            self.confirm_delete = false;
        }

        match event {
            TuiEvent::InputChar('a') => Some(ListEvent::Add),
            TuiEvent::Submit | TuiEvent::InputChar('e') => self.selected().map(ListEvent::Edit),
            TuiEvent::InputChar(' ') | TuiEvent::InputChar('t') => {
                self.selected().map(ListEvent::Toggle)
            }
            TuiEvent::InputChar('d') => {
                let index = self.selected()?;
                if self.confirm_delete {
                    self.confirm_delete = false;
                    Some(ListEvent::Delete(index))
                } else {
                    self.confirm_delete = true;
                    None
                }
            }
            TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => {
                self.select_previous();
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => {
                self.select_next();
                None
            }
            TuiEvent::CursorHome | TuiEvent::InputChar('g') => {
                if self.len > 0 {
                    self.list_state.select(Some(0));
                }
                None
            }
            TuiEvent::CursorEnd | TuiEvent::InputChar('G') => {
                if self.len > 0 {
                    self.list_state.select(Some(self.len - 1));
                }
                None
            }
            TuiEvent::MouseClick(column, row) => {
                let (index, on_switch) = self.hit_test(*column, *row)?;
                self.list_state.select(Some(index));
                Some(if on_switch {
                    ListEvent::Toggle(index)
                } else {
                    ListEvent::Edit(index)
                })
            }
            TuiEvent::InputChar('q') => Some(ListEvent::Quit),
            _ => None,
        }
    }
}

/// Build the completed-row style, falling back to the default color when
/// the configured one doesn't parse.
pub fn resolve_done_style(done: &DoneStyle) -> Style {
    let color = Color::from_str(&done.color).unwrap_or_else(|_| {
        warn!("Unrecognized done_color {:?}, using default", done.color);
        Color::from_str(crate::core::config::DEFAULT_DONE_COLOR).unwrap_or(Color::LightMagenta)
    });
    let style = Style::default().fg(color);
    if done.strikethrough {
        style.add_modifier(Modifier::CROSSED_OUT)
    } else {
        style
    }
}

/// Transient render wrapper for the list.
pub struct TodoList<'a> {
    state: &'a mut TodoListState,
    items: &'a [TodoItem],
    done_style: Style,
}

impl<'a> TodoList<'a> {
    pub fn new(state: &'a mut TodoListState, items: &'a [TodoItem], done_style: Style) -> Self {
        Self {
            state,
            items,
            done_style,
        }
    }

    fn row(&self, index: usize, item: &'a TodoItem) -> ListItem<'a> {
        // Rows are one line tall; hit testing relies on it
        let title = item.title.replace(['\n', '\r'], " ");
        let (switch, switch_style, title_style) = if item.is_done {
            let switch_style = Style::default().fg(self.done_style.fg.unwrap_or(Color::Reset));
            ("[x]", switch_style, self.done_style)
        } else {
            ("[ ]", Style::default().fg(Color::DarkGray), Style::default())
        };

        let pending_delete = self.state.confirm_delete && self.state.selected() == Some(index);
        let title_style = if pending_delete {
            title_style.fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            title_style
        };

        ListItem::new(Line::from(vec![
            Span::styled(switch, switch_style),
            Span::raw(" "),
            Span::styled(title, title_style),
        ]))
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        self.state.len = self.items.len();
        self.state.inner_area = block.inner(area);

        if self.items.is_empty() {
            let empty = Paragraph::new("Nothing to do. Press a to add an item.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items = self.items;
        let rows: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, item)| self.row(i, item))
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
