//! Typed host-domain contracts shared by the room scene, the PC interface, and browser adapters.
//!
//! The crate owns the key-value persistence seam that stands in for browser `localStorage`.
//! Concrete browser adapters live in `platform_host_web`; native builds and tests use the
//! in-memory and no-op stores defined here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, save_pref_with, KeyValueStore, MemoryKeyValueStore, NoopKeyValueStore,
    StorageError,
};
