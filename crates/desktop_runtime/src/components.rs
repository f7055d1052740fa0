//! Desktop shell UI composition and interaction surfaces.
//!
//! Every component here renders from [`DesktopRuntimeContext::state`] and reports intents as
//! [`DesktopAction`]s. None of them write state directly.

mod assistant_panel;
mod dock;
mod lock_screen;
mod mobile;
mod setup;
mod top_bar;
mod window;

use std::time::Duration;

use leptos::*;
use platform_host::LocalClock;

use self::{
    assistant_panel::AssistantPanel,
    dock::{AppGrid, Dock},
    lock_screen::LockScreen,
    mobile::MobileShellView,
    setup::SetupWizard,
    top_bar::TopBar,
    window::DesktopWindow,
};

use crate::{
    apps::AppIcon,
    i18n,
    model::{AppId, Locale, Overlay, Point, ShellMode},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

/// Local wall clock refreshed every second while the calling component is mounted.
fn use_local_clock() -> ReadSignal<LocalClock> {
    let clock = create_rw_signal(LocalClock::now());
    if let Ok(interval) = set_interval_with_handle(
        move || {
            let now = LocalClock::now();
            if clock.get_untracked() != now {
                clock.set(now);
            }
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }
    clock.read_only()
}

#[component]
fn AppIconTile(icon: AppIcon) -> impl IntoView {
    view! {
        <span
            class="app-icon-tile"
            aria-hidden="true"
            style=format!("background:{};", icon.color)
        >
            {icon.glyph}
        </span>
    }
}

#[component]
/// Renders the shell for the current [`ShellMode`] and the brightness dimming layer.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let mode = create_memo(move |_| state.with(|s| s.mode));

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            class:dark=move || state.with(|s| s.context.dark_mode)
            dir=move || state.with(|s| s.context.locale.dir())
            data-mode=move || mode.get().as_str()
            style=move || {
                format!("background:{};", state.with(|s| s.context.wallpaper.css_background()))
            }
        >
            {move || match mode.get() {
                ShellMode::Booting => {
                    view! { <div class="boot-splash" aria-busy="true"></div> }.into_view()
                }
                ShellMode::Setup => view! { <SetupWizard /> }.into_view(),
                ShellMode::Locked => view! { <LockScreen /> }.into_view(),
                ShellMode::Mobile => view! { <MobileShellView /> }.into_view(),
                ShellMode::Desktop => view! { <Desktop /> }.into_view(),
            }}
            <div
                class="brightness-dim"
                aria-hidden="true"
                style=move || {
                    format!(
                        "opacity:{};",
                        state.with(|s| s.context.quick_settings.dim_opacity())
                    )
                }
            ></div>
        </div>
    }
}

#[component]
fn Desktop() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let locale = Signal::derive(move || state.with(|s| s.context.locale));
    let open_ids = Signal::derive(move || state.with(|s| s.windows.open_ids()));
    let active = Signal::derive(move || state.with(|s| s.windows.active()));
    // Minimized windows stay mounted (hidden) so their app state survives a restore.
    let mounted_windows = move || open_ids.get().into_iter().collect::<Vec<_>>();
    let dock_apps = runtime
        .registry
        .with_value(|registry| registry.dock_apps().into_iter().cloned().collect::<Vec<_>>());
    let all_apps = runtime
        .registry
        .with_value(|registry| registry.apps().cloned().collect::<Vec<_>>());
    let desktop_apps = runtime
        .registry
        .with_value(|registry| registry.desktop_apps().into_iter().cloned().collect::<Vec<_>>());
    let on_app_click =
        Callback::new(move |app_id: AppId| runtime.dispatch_action(DesktopAction::AppClicked { app_id }));
    let on_app_grid = Callback::new(move |_: ()| {
        runtime.dispatch_action(DesktopAction::ToggleOverlay(Overlay::AppGrid))
    });

    view! {
        <div class="desktop">
            <div
                class="desktop-dismiss-layer"
                on:pointerdown=move |_| runtime.dispatch_action(DesktopAction::DismissOverlays)
            ></div>
            <DesktopIcons apps=desktop_apps locale=locale on_app_click=on_app_click />
            <div class="desktop-window-layer">
                <For
                    each=mounted_windows
                    key=|app_id| *app_id
                    let:app_id
                >
                    <DesktopWindow app_id=app_id />
                </For>
            </div>
            <TopBar />
            <Dock
                apps=dock_apps
                open_ids=open_ids
                active=active
                locale=locale
                on_app_click=on_app_click
                on_app_grid=on_app_grid
            />
            <Show when=move || state.with(|s| s.context.overlays.app_grid) fallback=|| ()>
                <AppGrid apps=all_apps.clone() locale=locale on_app_click=on_app_click />
            </Show>
            <Show when=move || state.with(|s| s.context.overlays.assistant) fallback=|| ()>
                <AssistantPanel />
            </Show>
        </div>
    }
}

#[component]
fn DesktopIcons(
    apps: Vec<crate::apps::AppDescriptor>,
    locale: Signal<Locale>,
    on_app_click: Callback<AppId>,
) -> impl IntoView {
    view! {
        <div class="desktop-icons" role="list">
            {apps
                .into_iter()
                .map(|app| {
                    let app_id = app.id;
                    view! {
                        <button
                            type="button"
                            class="desktop-icon"
                            role="listitem"
                            on:dblclick=move |ev| {
                                stop_mouse_event(&ev);
                                on_app_click.call(app_id);
                            }
                        >
                            <AppIconTile icon=app.icon />
                            <span>{move || i18n::app_title(app_id, locale.get())}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
