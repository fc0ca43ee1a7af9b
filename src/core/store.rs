//! # To-Do Store
//!
//! The single owner of the to-do sequence. Every read and write of the list
//! goes through `TodoListStore`.
//!
//! ```text
//! TodoListStore
//! ├── items: Vec<TodoItem>            // display order == storage order
//! └── listeners: Vec<Box<dyn ChangeListener>>
//!
//! add / edit / toggle_done / delete ──► items ──► notify(Change)
//! ```
//!
//! Items are addressed by position, the way a table view addresses rows.
//! Each item also carries a stable `ItemId`, so callers that hold on to an
//! item across other mutations can use the `*_item` variants instead.
//!
//! A failed operation leaves the sequence untouched and notifies nobody.

use log::{debug, warn};
use std::fmt;

/// Titles every run starts with unless configured otherwise.
pub const DEMO_TITLES: [&str; 4] = ["카페가기", "과제하기", "저녁약속", "산책하기"];

// ============================================================================
// Items
// ============================================================================

/// Opaque identifier assigned once, when an item is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(uuid::Uuid);

impl ItemId {
    fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: ItemId,
    pub title: String,
    pub is_done: bool,
}

impl TodoItem {
    fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            is_done: false,
        }
    }
}

// ============================================================================
// Change notification
// ============================================================================

/// What a Display Surface has to redraw after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Re-fetch the whole sequence and redraw every row.
    Reload,
    /// A single row went away; rows after `index` moved up by one.
    Removed { index: usize, id: ItemId },
}

/// Receives a `Change` after every successful mutation.
pub trait ChangeListener {
    fn on_change(&mut self, change: &Change);
}

impl<F> ChangeListener for F
where
    F: FnMut(&Change),
{
    fn on_change(&mut self, change: &Change) {
        self(change)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Index-addressed operation outside `0..len`.
    OutOfRange { index: usize, len: usize },
    /// Id-addressed operation on an item no longer in the list.
    UnknownItem(ItemId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of {len} items")
            }
            StoreError::UnknownItem(id) => write!(f, "no item with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

// ============================================================================
// Store
// ============================================================================

#[derive(Default)]
pub struct TodoListStore {
    items: Vec<TodoItem>,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl TodoListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the four demo items, none of them done.
    pub fn seeded() -> Self {
        Self::with_titles(DEMO_TITLES)
    }

    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: titles.into_iter().map(TodoItem::new).collect(),
            listeners: Vec::new(),
        }
    }

    /// Register a Display Surface. Listeners run in subscription order.
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_done).count()
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Append a new, not-done item. Never fails; blank titles are stored as-is.
    pub fn add(&mut self, title: impl Into<String>) -> ItemId {
        let item = TodoItem::new(title);
        let id = item.id;
        debug!("add: {:?} at {}", item.title, self.items.len());
        self.items.push(item);
        self.notify(Change::Reload);
        id
    }

    /// Replace the title at `index`. Completion state and id are kept.
    pub fn edit(&mut self, index: usize, new_title: impl Into<String>) -> Result<(), StoreError> {
        self.check(index)?;
        let item = &mut self.items[index];
        item.title = new_title.into();
        debug!("edit: {} -> {:?} (done={})", index, item.title, item.is_done);
        self.notify(Change::Reload);
        Ok(())
    }

    /// Flip `is_done` at `index`, returning the new value.
    pub fn toggle_done(&mut self, index: usize) -> Result<bool, StoreError> {
        self.check(index)?;
        let item = &mut self.items[index];
        item.is_done = !item.is_done;
        let is_done = item.is_done;
        debug!("toggle: {} -> done={}", index, is_done);
        self.notify(Change::Reload);
        Ok(is_done)
    }

    /// Remove the item at `index`; later items shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<TodoItem, StoreError> {
        self.check(index)?;
        let removed = self.items.remove(index);
        debug!("delete: {} ({:?})", index, removed.title);
        self.notify(Change::Removed {
            index,
            id: removed.id,
        });
        Ok(removed)
    }

    pub fn edit_item(&mut self, id: ItemId, new_title: impl Into<String>) -> Result<(), StoreError> {
        let index = self.resolve(id)?;
        self.edit(index, new_title)
    }

    pub fn toggle_item(&mut self, id: ItemId) -> Result<bool, StoreError> {
        let index = self.resolve(id)?;
        self.toggle_done(index)
    }

    pub fn delete_item(&mut self, id: ItemId) -> Result<TodoItem, StoreError> {
        let index = self.resolve(id)?;
        self.delete(index)
    }

    fn check(&self, index: usize) -> Result<(), StoreError> {
        if index < self.items.len() {
            Ok(())
        } else {
            let err = StoreError::OutOfRange {
                index,
                len: self.items.len(),
            };
            warn!("rejected: {}", err);
            Err(err)
        }
    }

    fn resolve(&self, id: ItemId) -> Result<usize, StoreError> {
        self.position_of(id).ok_or_else(|| {
            warn!("rejected: unknown item {}", id);
            StoreError::UnknownItem(id)
        })
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener.on_change(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Recorder, snapshot};

    #[test]
    fn test_seeded_has_demo_items_not_done() {
        let store = TodoListStore::seeded();
        assert_eq!(
            snapshot(&store),
            vec![
                ("카페가기".to_string(), false),
                ("과제하기".to_string(), false),
                ("저녁약속".to_string(), false),
                ("산책하기".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let mut store = TodoListStore::new();
        for (n, title) in ["a", "b", "c"].iter().enumerate() {
            store.add(*title);
            assert_eq!(store.len(), n + 1);
            assert_eq!(store.items().last().map(|i| i.title.as_str()), Some(*title));
        }
        assert!(store.items().iter().all(|i| !i.is_done));
    }

    #[test]
    fn test_add_accepts_empty_title() {
        let mut store = TodoListStore::new();
        store.add("");
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].title, "");
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut store = TodoListStore::seeded();
        assert_eq!(store.toggle_done(2), Ok(true));
        assert_eq!(store.toggle_done(2), Ok(false));
        assert!(!store.items()[2].is_done);
    }

    #[test]
    fn test_edit_preserves_done_and_id() {
        let mut store = TodoListStore::seeded();
        store.toggle_done(1).unwrap();
        let id = store.items()[1].id;

        store.edit(1, "과제 끝내기").unwrap();

        let item = &store.items()[1];
        assert_eq!(item.title, "과제 끝내기");
        assert!(item.is_done);
        assert_eq!(item.id, id);
    }

    #[test]
    fn test_delete_shifts_later_items() {
        let mut store = TodoListStore::seeded();
        let before = snapshot(&store);

        let removed = store.delete(1).unwrap();

        assert_eq!(removed.title, "과제하기");
        assert_eq!(store.len(), 3);
        let after = snapshot(&store);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after[2], before[3]);
    }

    #[test]
    fn test_out_of_range_leaves_list_unchanged() {
        let mut store = TodoListStore::seeded();
        let before = store.items().to_vec();
        let oor = StoreError::OutOfRange { index: 4, len: 4 };

        assert_eq!(store.edit(4, "x"), Err(oor.clone()));
        assert_eq!(store.toggle_done(4), Err(oor.clone()));
        assert_eq!(store.delete(4), Err(oor));
        assert_eq!(
            store.delete(usize::MAX),
            Err(StoreError::OutOfRange { index: usize::MAX, len: 4 })
        );

        assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn test_empty_store_rejects_index_zero() {
        let mut store = TodoListStore::new();
        assert_eq!(
            store.toggle_done(0),
            Err(StoreError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_listeners_see_every_successful_mutation() {
        let mut store = TodoListStore::seeded();
        let recorder = Recorder::default();
        store.subscribe(recorder.listener());

        store.add("영화보기");
        store.edit(0, "카페").unwrap();
        store.toggle_done(0).unwrap();
        let removed_id = store.items()[3].id;
        store.delete(3).unwrap();

        assert_eq!(
            recorder.changes(),
            vec![
                Change::Reload,
                Change::Reload,
                Change::Reload,
                Change::Removed { index: 3, id: removed_id },
            ]
        );
    }

    #[test]
    fn test_failed_operation_does_not_notify() {
        let mut store = TodoListStore::new();
        let recorder = Recorder::default();
        store.subscribe(recorder.listener());

        assert!(store.delete(0).is_err());
        assert!(recorder.changes().is_empty());
    }

    #[test]
    fn test_closure_listener() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut store = TodoListStore::new();
        store.subscribe(move |_: &Change| seen.set(seen.get() + 1));

        store.add("a");
        store.add("b");
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_id_survives_shift() {
        let mut store = TodoListStore::seeded();
        let walk = store.items()[3].id;

        store.delete(0).unwrap();

        assert_eq!(store.position_of(walk), Some(2));
        assert_eq!(store.toggle_item(walk), Ok(true));
        store.edit_item(walk, "긴 산책").unwrap();
        assert_eq!(store.items()[2].title, "긴 산책");
        assert!(store.items()[2].is_done);
    }

    #[test]
    fn test_deleted_id_is_unknown() {
        let mut store = TodoListStore::seeded();
        let id = store.items()[0].id;
        store.delete_item(id).unwrap();

        assert_eq!(store.delete_item(id), Err(StoreError::UnknownItem(id)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut store = TodoListStore::new();
        let a = store.add("same");
        let b = store.add("same");
        assert_ne!(a, b);
    }

    #[test]
    fn test_done_count() {
        let mut store = TodoListStore::seeded();
        store.toggle_done(0).unwrap();
        store.toggle_done(3).unwrap();
        assert_eq!(store.done_count(), 2);
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for list of 3 items");
    }
}
