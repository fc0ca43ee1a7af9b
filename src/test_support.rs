//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::state::App;
use crate::core::store::{Change, TodoListStore};

/// Creates a test App holding the four demo items.
pub fn test_app() -> App {
    App::new(TodoListStore::seeded())
}

/// `(title, is_done)` pairs in display order.
pub fn snapshot(store: &TodoListStore) -> Vec<(String, bool)> {
    store
        .items()
        .iter()
        .map(|item| (item.title.clone(), item.is_done))
        .collect()
}

/// Collects every `Change` a store emits.
#[derive(Default, Clone)]
pub struct Recorder {
    changes: Rc<RefCell<Vec<Change>>>,
}

impl Recorder {
    pub fn listener(&self) -> impl FnMut(&Change) + use<> {
        let changes = Rc::clone(&self.changes);
        move |change: &Change| changes.borrow_mut().push(change.clone())
    }

    pub fn changes(&self) -> Vec<Change> {
        self.changes.borrow().clone()
    }
}
