//! Watch-history subsystem.
//!
//! One serialized list of [`WatchEvent`]s behind a pluggable
//! [`HistoryStorage`] backend, fronted by the fail-closed [`HistoryStore`].

mod sanitize;
mod storage;
mod store;
mod types;

pub use storage::{FileStorage, HistoryStorage, StorageError};
pub use store::HistoryStore;
pub use types::{RecordWatch, WatchEvent};
