//! The in-memory item store: an ordered list of items plus the id counter.
//!
//! # Design
//! A single `Mutex` guards both the item list and the counter. Holding one
//! lock for every operation keeps increment-and-append indivisible under
//! concurrent creates and rules out lost updates between concurrent list
//! mutations. Every operation is a short linear scan; nothing blocks on I/O
//! inside the critical section.
//!
//! The store never errors. "Not found" outcomes surface as `Option`/`bool`
//! return values and the caller decides how to report them.

use std::sync::Mutex;

use crate::model::{TodoDraft, TodoItem};

#[derive(Debug, Default)]
struct Inner {
    items: Vec<TodoItem>,
    counter: i64,
}

/// Thread-safe holder of all todo items and the id-assignment counter.
///
/// Ids start at 1, increase monotonically per create, and are only reused
/// after [`delete_all`](TodoStore::delete_all) resets the counter.
#[derive(Debug, Default)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock still holds valid data (plain values, no torn
        // state possible), so recover it instead of propagating the panic.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return all items in insertion order.
    pub fn list_all(&self) -> Vec<TodoItem> {
        self.locked().items.clone()
    }

    /// Return the item with the given id, if any.
    pub fn find_by_id(&self, id: i64) -> Option<TodoItem> {
        self.locked()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// True when some stored item has exactly this content (case-sensitive).
    ///
    /// This is the pre-create uniqueness gate; `create` itself does not
    /// check uniqueness.
    pub fn exists_by_content(&self, content: &str) -> bool {
        self.locked()
            .items
            .iter()
            .any(|item| item.content() == content)
    }

    /// Assign the next id, append a new item with the draft's content, and
    /// return the created item.
    pub fn create(&self, draft: &TodoDraft) -> TodoItem {
        let mut inner = self.locked();
        inner.counter += 1;
        let created = TodoItem::with_id(inner.counter, draft.content());
        inner.items.push(created.clone());
        created
    }

    /// Replace the item with the given id by a new item carrying the same id
    /// and the draft's content. Returns false when no such id exists.
    pub fn update(&self, id: i64, replacement: &TodoDraft) -> bool {
        let mut inner = self.locked();
        match inner.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                inner.items[index] = TodoItem::with_id(id, replacement.content());
                true
            }
            None => false,
        }
    }

    /// Remove the item with the given id. Returns false when no such id
    /// exists.
    pub fn delete_by_id(&self, id: i64) -> bool {
        let mut inner = self.locked();
        match inner.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                inner.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove every item and reset the id counter, so the next created item
    /// receives id 1 again.
    pub fn delete_all(&self) {
        let mut inner = self.locked();
        inner.items.clear();
        inner.counter = 0;
    }
}
