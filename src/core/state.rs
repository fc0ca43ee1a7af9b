//! # Application State
//!
//! Core business state for the to-do list. Domain logic only - no
//! TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: TodoListStore       // the to-do sequence
//! ├── status_message: String     // status bar text
//! ├── error: Option<String>      // last rejected operation
//! ├── blank_titles: BlankTitles  // what the title dialog does with blank input
//! └── done_style: DoneStyle      // how completed rows are drawn
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::{BlankTitles, ResolvedConfig, Seed};
use crate::core::store::TodoListStore;

/// Presentation contract for completed rows, resolved from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneStyle {
    pub color: String,
    pub strikethrough: bool,
}

pub struct App {
    pub store: TodoListStore,
    pub status_message: String,
    pub error: Option<String>,
    pub blank_titles: BlankTitles,
    pub done_style: DoneStyle,
}

impl App {
    pub fn new(store: TodoListStore) -> Self {
        Self {
            store,
            status_message: String::from("Welcome to your to-do list!"),
            error: None,
            blank_titles: BlankTitles::default(),
            done_style: DoneStyle {
                color: crate::core::config::DEFAULT_DONE_COLOR.to_string(),
                strikethrough: crate::core::config::DEFAULT_STRIKETHROUGH,
            },
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let store = match config.seed {
            Seed::Demo => TodoListStore::seeded(),
            Seed::Empty => TodoListStore::new(),
            Seed::Custom => TodoListStore::with_titles(config.custom_items.iter().cloned()),
        };
        Self {
            blank_titles: config.blank_titles,
            done_style: DoneStyle {
                color: config.done_color.clone(),
                strikethrough: config.strikethrough,
            },
            ..Self::new(store)
        }
    }
}
