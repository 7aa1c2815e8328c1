//! Domain types for the todo service.
//!
//! # Design
//! `TodoItem` keeps its fields private and exposes no mutators: once built,
//! an item never changes. The store realizes "update" by constructing a new
//! item and swapping it into position, so concurrent readers holding a clone
//! always see a consistent id/content pair.
//!
//! `TodoDraft` is the write-side payload. It carries only `content`; any
//! `id` a client supplies in the JSON body is dropped during
//! deserialization, because ids are assigned exclusively by the store.

use serde::{Deserialize, Serialize};

/// Sentinel id for an item that has not been stored yet.
pub const UNASSIGNED_ID: i64 = -1;

fn unassigned_id() -> i64 {
    UNASSIGNED_ID
}

/// A single todo item.
///
/// JSON shape: `{"id": <integer>, "content": <string>}`. An item
/// deserialized without an `id` field carries the `-1` sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    #[serde(default = "unassigned_id")]
    id: i64,
    content: String,
}

impl TodoItem {
    /// Build an item that has not been assigned an id yet.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            content: content.into(),
        }
    }

    /// Build an item with a known id. Used by the store when assigning ids
    /// and when replacing an item on update.
    pub fn with_id(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Request payload for creating or updating an item.
///
/// Only `content` is read; unknown fields — including a client-supplied
/// `id` — are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoDraft {
    content: String,
}

impl TodoDraft {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
