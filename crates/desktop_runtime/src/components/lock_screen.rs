use super::*;

/// Any password, including an empty one, unlocks.
#[component]
pub(super) fn LockScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock = use_local_clock();
    let locale = create_memo(move |_| state.with(|s| s.context.locale));
    let strings = move || i18n::strings(locale.get());
    let password = create_rw_signal(String::new());
    let unlock = move || runtime.dispatch_action(DesktopAction::Unlock);

    view! {
        <div class="lock-screen" role="dialog" aria-modal="true">
            <div class="lock-clock">
                <div class="lock-time">{move || clock.get().h_mm_12h()}</div>
                <div class="lock-date">{move || i18n::date_label(clock.get(), locale.get())}</div>
            </div>
            <form
                class="lock-login"
                on:submit=move |ev| {
                    ev.prevent_default();
                    unlock();
                }
            >
                <div class="lock-avatar" aria-hidden="true"></div>
                <h2 class="lock-user">
                    {move || {
                        state.with(|s| s.context.display_name.clone())
                            .unwrap_or_else(|| "Hamza".to_string())
                    }}
                </h2>
                <input
                    type="password"
                    class="lock-password"
                    autofocus=true
                    placeholder=move || strings().lock_password_placeholder
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" class="lock-submit" aria-label=move || strings().lock_button>
                    "→"
                </button>
                <p class="lock-hint">{move || strings().lock_hint}</p>
            </form>
            <footer class="lock-footer">"HamzaOS Portfolio v1.0"</footer>
        </div>
    }
}
