//! # TUI Components
//!
//! ## Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: progress counter plus status or error text
//!
//! ## Stateful Components (Event-Driven)
//!
//! - `TodoList`: the rows, selection, delete confirmation, hit testing
//! - `TitleDialog`: modal single-line prompt for add/edit
//!
//! Components receive external data as props, not by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TodoList::new(&mut tui.list, app.store.items(), tui.done_style).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! todo_list.render(frame, area); // reads from global App
//! ```
//!
//! Each component file holds its state, its events, rendering, event
//! handling and tests.

mod title_bar;
pub use title_bar::TitleBar;

pub mod title_dialog;
pub use title_dialog::{DialogEvent, DialogKind, TitleDialog};

pub mod todo_list;
pub use todo_list::{ListEvent, TodoList, TodoListState};
