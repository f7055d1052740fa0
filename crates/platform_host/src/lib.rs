//! Typed host-domain contracts shared by the desktop runtime and its browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference store
//! used for the persisted display name, the generative-text assistant contract consumed by the
//! terminal and assistant panel, and small time helpers. Concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assistant;
pub mod host;
pub mod storage;
pub mod time;

pub use assistant::{
    AssistantFuture, AssistantRequest, AssistantService, NoopAssistantService,
    ScriptedAssistantService, DEFAULT_ASSISTANT_TIMEOUT_MS,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::LocalClock;
