//! In-memory store core for the todo service.
//!
//! # Overview
//! Owns the mutable list of todo items and the id counter, and implements
//! every CRUD operation over them. No I/O, no HTTP types — the HTTP surface
//! lives in the server crate and consumes this one.
//!
//! # Design
//! - `TodoItem` is immutable once constructed; an update swaps in a freshly
//!   built item with the same id rather than mutating fields in place.
//! - `TodoStore` guards the item list and the id counter behind a single
//!   mutex, so concurrent creates can never observe a duplicate id and list
//!   mutations can never lose updates.
//! - Absence is signalled with `Option`/`bool`, never with errors — deciding
//!   what a missing item means (404, skip, retry) is the caller's job.

pub mod model;
pub mod store;

pub use model::{TodoDraft, TodoItem};
pub use store::TodoStore;
