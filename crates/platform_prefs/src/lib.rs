//! Flat key-value preference storage for the component runtime.
//!
//! Preferences are small raw strings keyed by name (for example a theme token
//! or a boolean-as-string flag). The runtime reads them once at boot and
//! writes them on every user-driven change; it never interprets the store as
//! anything richer than text per key.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod prefs;
mod web;

pub use prefs::{MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture};
pub use web::WebPrefsStore;
