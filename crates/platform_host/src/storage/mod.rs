//! Browser-local persistence contracts.

pub mod prefs;
