//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{AssistantService, MemoryPrefsStore, NoopAssistantService, PrefsStore};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// In-memory composition used by native builds and tests.
    InMemory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::InMemory => "in-memory",
        }
    }
}

/// Runtime-selected host service bundle injected into the shared desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store (holds the persisted display name).
    pub prefs: Rc<dyn PrefsStore>,
    /// Outbound generative-text service used by the terminal and assistant panel.
    pub assistant: Rc<dyn AssistantService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an in-memory bundle with an unconfigured assistant.
    pub fn in_memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            assistant: Rc::new(NoopAssistantService),
            host_strategy: HostStrategy::InMemory,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy.as_str())
            .finish_non_exhaustive()
    }
}
