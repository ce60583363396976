//! Core types for calstore.
//!
//! This crate provides everything below the presentation layer:
//! - `Event` and related types for calendar entries
//! - `EventStore`, the single owner of the event collection and its durable mirror
//! - `storage` backends the store persists snapshots into
//! - `export` for rendering the collection as an .ics calendar

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod id;
pub mod storage;
pub mod store;

pub use config::CalStoreConfig;
pub use error::{CalStoreError, CalStoreResult};
pub use event::*;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{EventStore, Outcome};
