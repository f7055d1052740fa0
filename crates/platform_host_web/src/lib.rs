//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the concrete browser services: `localStorage` preferences for the persisted
//! display name and a `fetch`-backed generative-text assistant. Native builds compile the same
//! types with inert fallbacks so the runtime can be tested off-browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and service bundle assembly.
pub mod adapters;
pub mod assistant;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use assistant::WebAssistantService;
pub use storage::local_prefs::WebPrefsStore;
