use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let display_name = persistence::load_display_name(prefs.as_ref()).await;
            logging::log!(
                "boot hydration via {}: display name {}",
                host.host_strategy_name(),
                if display_name.is_some() { "found" } else { "absent" }
            );
            dispatch.call(DesktopAction::HydrateDisplayName(display_name));
        });
    });
}
