use std::collections::BTreeSet;

use super::*;
use crate::apps::AppDescriptor;

#[component]
/// Launcher strip. Stateless: it reads the open and active apps it is given and reports clicks.
pub(super) fn Dock(
    apps: Vec<AppDescriptor>,
    open_ids: Signal<BTreeSet<AppId>>,
    active: Signal<Option<AppId>>,
    locale: Signal<Locale>,
    on_app_click: Callback<AppId>,
    on_app_grid: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="dock" aria-label="Dock">
            {apps
                .into_iter()
                .map(|app| {
                    let app_id = app.id;
                    view! {
                        <button
                            type="button"
                            class="dock-item"
                            class:running=move || open_ids.with(|ids| ids.contains(&app_id))
                            class:active=move || active.get() == Some(app_id)
                            title=move || i18n::app_title(app_id, locale.get())
                            aria-label=move || i18n::app_title(app_id, locale.get())
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                on_app_click.call(app_id);
                            }
                        >
                            <AppIconTile icon=app.icon />
                            <span class="dock-indicator" aria-hidden="true"></span>
                        </button>
                    }
                })
                .collect_view()}
            <button
                type="button"
                class="dock-item dock-app-grid"
                aria-label="Show applications"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    on_app_grid.call(());
                }
            >
                <span class="app-grid-glyph" aria-hidden="true">"⋮⋮⋮"</span>
            </button>
        </nav>
    }
}

#[component]
/// Full-screen launcher listing every registered app.
pub(super) fn AppGrid(
    apps: Vec<AppDescriptor>,
    locale: Signal<Locale>,
    on_app_click: Callback<AppId>,
) -> impl IntoView {
    view! {
        <div class="app-grid-overlay" role="dialog" aria-label="Applications">
            <div class="app-grid">
                {apps
                    .into_iter()
                    .map(|app| {
                        let app_id = app.id;
                        view! {
                            <button
                                type="button"
                                class="app-grid-item"
                                on:click=move |ev| {
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
        </div>
    }
}
