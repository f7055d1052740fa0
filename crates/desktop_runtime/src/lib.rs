//! Window-manager core and Leptos shell for the HamzaOS web desktop.
//!
//! State lives in a [`DesktopStore`] driven by [`reduce_desktop`]; components under
//! [`components`] render snapshots and dispatch [`DesktopAction`]s. Host side effects are emitted
//! as [`RuntimeEffect`]s and run by the provider against injected [`platform_host`] services.

pub mod apps;
pub mod assistant;
pub mod components;
pub mod drag;
mod effect_executor;
pub mod host;
pub mod i18n;
pub mod layout;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod shell;
pub mod store;
pub mod terminal;
pub mod window_manager;

pub use apps::{AppDescriptor, AppRegistry, RegistryError};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use store::{DesktopStore, SubscriptionId};
pub use window_manager::{OpenOutcome, WindowStore};
