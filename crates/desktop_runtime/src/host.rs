//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Effect execution and viewport queries sit behind this boundary so the reducer stays pure and
//! tests can run against [`HostServices::in_memory`](platform_host::HostServices::in_memory).

mod boot;
mod host_ui;

use std::rc::Rc;

use leptos::{logging, spawn_local, Callback};
use platform_host::{AssistantService, HostServices, PrefsStore};

use crate::{
    persistence,
    reducer::{DesktopAction, RuntimeEffect},
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    pub fn assistant_service(&self) -> Rc<dyn AssistantService> {
        self.services.assistant.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Reads the persisted display name and dispatches
    /// [`DesktopAction::HydrateDisplayName`] once it is known.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistDisplayName(name) => {
                let prefs = self.prefs_store();
                spawn_local(async move {
                    if let Err(err) = persistence::persist_display_name(prefs.as_ref(), &name).await
                    {
                        logging::warn!("persist display name failed: {err}");
                    }
                });
            }
            RuntimeEffect::ApplyDocumentLocale(locale) => host_ui::apply_document_locale(locale),
            RuntimeEffect::ApplyColorScheme(dark) => host_ui::apply_color_scheme(dark),
        }
    }

    /// Current viewport width in CSS pixels.
    pub fn viewport_width(&self) -> i32 {
        host_ui::viewport_width()
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("host_strategy", &self.host_strategy_name())
            .finish()
    }
}
