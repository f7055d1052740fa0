use super::*;
use crate::model::QuickSetting;

fn slider_value(ev: &web_sys::Event) -> Option<u8> {
    event_target_value(ev).parse::<u8>().ok()
}

#[component]
pub(super) fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = use_local_clock();
    let locale = create_memo(move |_| state.with(|s| s.context.locale));
    let strings = move || i18n::strings(locale.get());
    let overlay_open = move |overlay: Overlay| state.with(|s| s.context.overlays.is_open(overlay));
    let toggle = move |overlay: Overlay| {
        runtime.dispatch_action(DesktopAction::ToggleOverlay(overlay));
    };

    view! {
        <header class="top-bar">
            <button
                type="button"
                class="top-bar-activities"
                class:active=move || overlay_open(Overlay::AppGrid)
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    toggle(Overlay::AppGrid);
                }
            >
                {move || strings().activities}
            </button>
            <button
                type="button"
                class="top-bar-clock"
                aria-haspopup="dialog"
                aria-expanded=move || overlay_open(Overlay::Calendar).to_string()
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    toggle(Overlay::Calendar);
                }
            >
                {move || clock.get().hh_mm_24h()}
            </button>
            <div class="top-bar-tray">
                <button
                    type="button"
                    class="top-bar-assistant"
                    class:active=move || overlay_open(Overlay::Assistant)
                    aria-label=move || strings().assistant_title
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        toggle(Overlay::Assistant);
                    }
                >
                    "✦"
                </button>
                <button
                    type="button"
                    class="top-bar-system"
                    aria-haspopup="menu"
                    aria-expanded=move || overlay_open(Overlay::SystemMenu).to_string()
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        toggle(Overlay::SystemMenu);
                    }
                >
                    <span class="tray-wifi" class:off=move || {
                        !state.with(|s| s.context.quick_settings.wifi)
                    }>"◠"</span>
                    <span class="tray-volume">"♪"</span>
                    <span class="tray-power">"⏻"</span>
                </button>
            </div>
            <Show when=move || overlay_open(Overlay::Calendar) fallback=|| ()>
                <CalendarPopover clock=clock locale=locale.into() />
            </Show>
            <Show when=move || overlay_open(Overlay::SystemMenu) fallback=|| ()>
                <SystemMenu />
            </Show>
        </header>
    }
}

#[component]
fn CalendarPopover(clock: ReadSignal<LocalClock>, locale: Signal<Locale>) -> impl IntoView {
    view! {
        <div class="popover calendar-popover" role="dialog">
            <div class="calendar-date">{move || i18n::date_label(clock.get(), locale.get())}</div>
            <div class="calendar-notifications">
                {move || i18n::strings(locale.get()).no_notifications}
            </div>
        </div>
    }
}

#[component]
fn SystemMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let settings = create_memo(move |_| state.with(|s| s.context.quick_settings));
    let dark_mode = create_memo(move |_| state.with(|s| s.context.dark_mode));
    let strings = move || i18n::strings(state.with(|s| s.context.locale));
    let apply = move |setting: QuickSetting| {
        runtime.dispatch_action(DesktopAction::SetQuickSetting(setting));
    };

    view! {
        <div class="popover system-menu" role="menu">
            <div class="system-menu-user">
                {move || state.with(|s| s.context.display_name.clone().unwrap_or_default())}
            </div>
            <div class="system-menu-toggles">
                <button
                    type="button"
                    class="quick-toggle"
                    class:on=move || settings.get().wifi
                    aria-pressed=move || settings.get().wifi.to_string()
                    on:click=move |_| apply(QuickSetting::Wifi(!settings.get_untracked().wifi))
                >
                    {move || strings().wifi}
                </button>
                <button
                    type="button"
                    class="quick-toggle"
                    class:on=move || settings.get().bluetooth
                    aria-pressed=move || settings.get().bluetooth.to_string()
                    on:click=move |_| {
                        apply(QuickSetting::Bluetooth(!settings.get_untracked().bluetooth))
                    }
                >
                    {move || strings().bluetooth}
                </button>
                <button
                    type="button"
                    class="quick-toggle"
                    class:on=move || dark_mode.get()
                    aria-pressed=move || dark_mode.get().to_string()
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::SetDarkMode(!dark_mode.get_untracked()))
                    }
                >
                    {move || strings().dark_mode}
                </button>
            </div>
            <label class="quick-slider">
                <span>{move || strings().brightness}</span>
                <input
                    type="range"
                    min="10"
                    max="100"
                    prop:value=move || settings.get().brightness.to_string()
                    on:input=move |ev| {
                        if let Some(level) = slider_value(&ev) {
                            apply(QuickSetting::Brightness(level));
                        }
                    }
                />
            </label>
            <label class="quick-slider">
                <span>{move || strings().volume}</span>
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || settings.get().volume.to_string()
                    on:input=move |ev| {
                        if let Some(level) = slider_value(&ev) {
                            apply(QuickSetting::Volume(level));
                        }
                    }
                />
            </label>
            <div class="system-menu-actions">
                <button
                    type="button"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::EnterMobile)
                >
                    {move || strings().mobile_mode}
                </button>
                <button type="button" on:click=move |_| runtime.dispatch_action(DesktopAction::Lock)>
                    {move || strings().lock}
                </button>
            </div>
        </div>
    }
}
