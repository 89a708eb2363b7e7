//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Every adapter compiles on native targets too, where it degrades to an empty or no-op
//! behavior so the runtime crates stay testable without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod location;
pub mod storage;

pub use location::{clear_query_string, current_query_string, viewport_size, ViewportSize};
pub use storage::local_storage::LocalStorageStore;

/// Returns the key-value store used by the running host.
pub fn key_value_store() -> LocalStorageStore {
    LocalStorageStore
}
