//! # Core Application Logic
//!
//! The to-do list's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (the list)     │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │ Change / Effect
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Surface   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: `TodoListStore`, the sole owner of the item sequence
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Settings and their override hierarchy

pub mod action;
pub mod config;
pub mod state;
pub mod store;
