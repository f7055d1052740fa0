use std::rc::Rc;

use platform_host::{HostServices, HostStrategy, MemoryPrefsStore, NoopAssistantService};

use crate::{WebAssistantService, WebPrefsStore};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-in-memory")]
    {
        HostStrategy::InMemory
    }

    #[cfg(not(feature = "host-in-memory"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Assembles the host service bundle for the selected strategy.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            assistant: Rc::new(WebAssistantService::from_build_env()),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::InMemory => HostServices {
            prefs: Rc::new(MemoryPrefsStore::default()),
            assistant: Rc::new(NoopAssistantService),
            host_strategy: HostStrategy::InMemory,
        },
    }
}
