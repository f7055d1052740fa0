use super::*;
use crate::apps::render_app_contents;

#[component]
pub(super) fn MobileShellView() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = use_local_clock();
    let locale = create_memo(move |_| state.with(|s| s.context.locale));
    let foreground = create_memo(move |_| state.with(|s| s.mobile.foreground));
    let apps = runtime
        .registry
        .with_value(|registry| registry.apps().cloned().collect::<Vec<_>>());
    let home = move |_: web_sys::MouseEvent| runtime.dispatch_action(DesktopAction::MobileHome);

    view! {
        <div class="mobile-shell">
            <div class="mobile-status-bar">
                <span>{move || clock.get().hh_mm_24h()}</span>
                <span class="mobile-camera" aria-hidden="true"></span>
                <span class="mobile-status-icons" aria-hidden="true">"▂▄▆ ◠ ▮"</span>
            </div>
            <main class="mobile-content" class:has-app=move || foreground.with(Option::is_some)>
                {move || match foreground.get() {
                    Some(app_id) => {
                        view! {
                            <div class="mobile-app" data-app-id=app_id.as_str()>
                                {render_app_contents(app_id)}
                            </div>
                        }
                            .into_view()
                    }
                    None => {
                        view! {
                            <MobileHomeScreen apps=apps.clone() clock=clock locale=locale.into() />
                        }
                            .into_view()
                    }
                }}
            </main>
            <nav class="mobile-nav-bar">
                <button type="button" aria-label="Back" on:click=home>"◀"</button>
                <button
                    type="button"
                    aria-label=move || i18n::strings(locale.get()).home
                    on:click=home
                >
                    "●"
                </button>
                <button type="button" aria-label="Recent apps" disabled=true>"■"</button>
            </nav>
        </div>
    }
}

#[component]
fn MobileHomeScreen(
    apps: Vec<crate::apps::AppDescriptor>,
    clock: ReadSignal<LocalClock>,
    locale: Signal<Locale>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="mobile-home">
            <div class="mobile-date-widget">
                <div class="mobile-time">{move || clock.get().hh_mm_24h()}</div>
                <div class="mobile-date">{move || i18n::date_label(clock.get(), locale.get())}</div>
            </div>
            <div class="mobile-app-grid">
                <button
                    type="button"
                    class="mobile-app-tile"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ExitMobile)
                >
                    <span class="app-icon-tile mobile-desktop-tile" aria-hidden="true">"▭"</span>
                    <span>{move || i18n::strings(locale.get()).desktop_mode}</span>
                </button>
                {apps
                    .into_iter()
                    .map(|app| {
                        let app_id = app.id;
                        view! {
                            <button
                                type="button"
                                class="mobile-app-tile"
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::AppClicked { app_id })
                                }
                            >
                                <AppIconTile icon=app.icon />
                                <span>{move || i18n::app_title(app_id, locale.get())}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
