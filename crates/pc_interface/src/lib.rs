//! Simulated PC interface: window registry, window-manager state machine, URL hydration, and
//! the Leptos surfaces that render them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
pub mod icon_grid;
pub mod model;
pub mod physics;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod url_sync;
pub mod windows;

pub use components::Interface;
pub use model::*;
pub use reducer::{reduce_window_manager, InterfaceAction, ReducerError};
pub use registry::{RegistryError, WindowRegistry, WindowRegistryEntry};
pub use runtime_context::{use_interface_runtime, InterfaceProvider, InterfaceRuntimeContext};
pub use url_sync::{hydration_action, share_query, WindowQuery};
