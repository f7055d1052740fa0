//! Settings app: language, color scheme, and wallpaper.

use leptos::*;

use crate::{
    i18n,
    model::{Locale, WallpaperPreset},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

#[component]
pub fn SettingsApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let locale = create_memo(move |_| state.with(|s| s.context.locale));
    let dark_mode = create_memo(move |_| state.with(|s| s.context.dark_mode));
    let wallpaper = create_memo(move |_| state.with(|s| s.context.wallpaper));
    let strings = move || i18n::strings(locale.get());

    view! {
        <div class="app-shell app-settings">
            <header class="settings-header">
                <h2>{move || strings().appearance}</h2>
            </header>
            <section class="settings-section">
                <h3>{move || strings().language}</h3>
                <div class="settings-choice-row" role="radiogroup">
                    {Locale::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    role="radio"
                                    class="settings-choice"
                                    class:selected=move || locale.get() == option
                                    aria-checked=move || (locale.get() == option).to_string()
                                    lang=option.html_lang()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::SetLocale(option))
                                    }
                                >
                                    {option.native_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="settings-section">
                <h3>
                    {move || if dark_mode.get() { strings().dark_mode } else { strings().light_mode }}
                </h3>
                <button
                    type="button"
                    class="settings-toggle"
                    aria-pressed=move || dark_mode.get().to_string()
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::SetDarkMode(!dark_mode.get_untracked()))
                    }
                >
                    {move || if dark_mode.get() { strings().light_mode } else { strings().dark_mode }}
                </button>
            </section>
            <section class="settings-section">
                <h3>{move || strings().wallpapers}</h3>
                <div class="settings-wallpapers">
                    {WallpaperPreset::ALL
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <button
                                    type="button"
                                    class="settings-wallpaper"
                                    class:selected=move || wallpaper.get() == preset
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::SetWallpaper(preset))
                                    }
                                >
                                    <span
                                        class="settings-wallpaper-swatch"
                                        style=format!("background:{};", preset.css_background())
                                    ></span>
                                    <span>{preset.label()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
