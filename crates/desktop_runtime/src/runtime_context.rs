//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived [`DesktopStore`], the runtime effect queue, viewport tracking,
//! and host bootstrap wiring. UI composition stays in [`crate::components`].

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use leptos::*;
use platform_host::HostServices;

use crate::{
    apps::AppRegistry,
    effect_executor,
    host::DesktopHostContext,
    layout,
    model::{DesktopState, Locale},
    reducer::{DesktopAction, RuntimeEffect},
    store::DesktopStore,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Application catalog resolved at shell construction.
    pub registry: StoredValue<AppRegistry>,
    /// Latest store snapshot, mirrored by a store subscription.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and processed by the shell.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Viewport width in CSS pixels, updated on `resize`.
    pub viewport_width: RwSignal<i32>,
    /// Store dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Whether the viewport is below the phone breakpoint. Tracks the viewport signal.
    pub fn is_mobile_viewport(&self) -> bool {
        layout::is_mobile_viewport(self.viewport_width.get())
    }
}

/// Builds the dispatch callback. Actions dispatched while another dispatch is running (from a
/// listener or effect) are queued and applied afterwards, in arrival order.
fn store_dispatch(
    store: Rc<RefCell<DesktopStore>>,
    effects: RwSignal<Vec<RuntimeEffect>>,
) -> Callback<DesktopAction> {
    let pending = Rc::new(RefCell::new(VecDeque::<DesktopAction>::new()));
    Callback::new(move |action: DesktopAction| {
        pending.borrow_mut().push_back(action);
        let Ok(mut store) = store.try_borrow_mut() else {
            return;
        };
        loop {
            let next = pending.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            match store.dispatch(action) {
                Ok(new_effects) => {
                    if !new_effects.is_empty() {
                        effects.update(|queue| queue.extend(new_effects));
                    }
                }
                Err(err) => logging::warn!("desktop reducer error: {err}"),
            }
        }
    })
}

fn load_registry() -> AppRegistry {
    AppRegistry::load().unwrap_or_else(|err| {
        logging::warn!("app catalog rejected, falling back to defaults: {err}");
        AppRegistry::fallback()
    })
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and boots persisted state.
pub fn DesktopProvider(
    /// Injected browser or in-memory host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let registry = load_registry();
    let initial = DesktopState::new(registry.initial_store(Locale::default()));
    let registry = store_value(registry);

    let state = create_rw_signal(initial.clone());
    let effects = create_rw_signal(vec![
        RuntimeEffect::ApplyDocumentLocale(initial.context.locale),
        RuntimeEffect::ApplyColorScheme(initial.context.dark_mode),
    ]);
    let viewport_width = create_rw_signal(host.with_value(DesktopHostContext::viewport_width));

    let store = Rc::new(RefCell::new(DesktopStore::new(initial)));
    let subscription = store
        .borrow_mut()
        .subscribe(move |snapshot| state.set(snapshot.clone()));
    let dispatch = store_dispatch(store.clone(), effects);
    on_cleanup(move || {
        if let Ok(mut store) = store.try_borrow_mut() {
            store.unsubscribe(subscription);
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport_width.set(host.with_value(DesktopHostContext::viewport_width));
    });
    on_cleanup(move || resize_listener.remove());

    let runtime = DesktopRuntimeContext {
        host,
        registry,
        state,
        effects,
        viewport_width,
        dispatch,
    };

    provide_context(runtime);

    host.with_value(|host| host.install_boot_hydration(dispatch));
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
