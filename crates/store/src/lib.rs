//! JSON document storage backend for Feedback Hub
//!
//! Two documents back the whole system: the append-only feedback log and the
//! derived analytics snapshot. This crate defines the `DocumentStore` trait
//! over them, a file-backed implementation that rewrites each document
//! atomically, and an in-memory implementation for tests.

pub mod backend;
pub mod document;
pub mod error;
pub mod json_file;
pub mod memory;

pub use backend::DocumentStore;
pub use document::DocumentKind;
pub use error::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
