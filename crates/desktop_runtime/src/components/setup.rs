use super::*;

const LOADING_STEP: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupStep {
    Welcome,
    Name,
    Loading,
}

impl SetupStep {
    /// Step after pressing "next", or `None` while the name is still blank.
    fn next(self, name: &str) -> Option<Self> {
        match self {
            Self::Welcome => Some(Self::Name),
            Self::Name if !name.trim().is_empty() => Some(Self::Loading),
            Self::Name | Self::Loading => None,
        }
    }
}

#[component]
pub(super) fn SetupWizard() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let locale = create_memo(move |_| runtime.state.with(|s| s.context.locale));
    let strings = move || i18n::strings(locale.get());
    let step = create_rw_signal(SetupStep::Welcome);
    let name = create_rw_signal(String::new());

    let advance = move || {
        let next = name.with_untracked(|name| step.get_untracked().next(name));
        if let Some(next) = next {
            step.set(next);
        }
    };
    let next_disabled = move || step.get() == SetupStep::Name && name.with(|n| n.trim().is_empty());

    view! {
        <div class="setup-wizard" role="dialog" aria-modal="true">
            <div class="setup-card">
                {move || match step.get() {
                    SetupStep::Welcome => {
                        view! {
                            <div class="setup-step">
                                <h2>{move || strings().setup_welcome_title}</h2>
                                <p>{move || strings().setup_welcome_body}</p>
                            </div>
                        }
                            .into_view()
                    }
                    SetupStep::Name => {
                        view! {
                            <div class="setup-step">
                                <h2>{move || strings().setup_name_title}</h2>
                                <input
                                    type="text"
                                    class="setup-name-input"
                                    autofocus=true
                                    placeholder=move || strings().setup_name_placeholder
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            advance();
                                        }
                                    }
                                />
                            </div>
                        }
                            .into_view()
                    }
                    SetupStep::Loading => {
                        view! { <SetupLoading display_name=name.get_untracked() /> }.into_view()
                    }
                }}
                <Show when=move || step.get() != SetupStep::Loading fallback=|| ()>
                    <footer class="setup-footer">
                        <span class="setup-version">"HamzaOS v1.0"</span>
                        <button
                            type="button"
                            class="setup-next"
                            disabled=next_disabled
                            on:click=move |_| advance()
                        >
                            {move || strings().setup_next}
                        </button>
                    </footer>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn SetupLoading(display_name: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let locale = runtime.state.with_untracked(|s| s.context.locale);
    let texts = i18n::strings(locale).setup_loading;
    let shown = create_rw_signal(0_usize);
    let display_name = store_value(display_name);

    if let Ok(interval) = set_interval_with_handle(
        move || {
            let next = shown.get_untracked() + 1;
            if next < texts.len() {
                shown.set(next);
            } else if next == texts.len() {
                shown.set(next);
                runtime.dispatch_action(DesktopAction::CompleteSetup {
                    display_name: display_name.get_value(),
                });
            }
        },
        LOADING_STEP,
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div class="setup-step setup-loading" aria-busy="true">
            <div class="setup-spinner" aria-hidden="true"></div>
            <h2>{move || texts[shown.get().min(texts.len() - 1)]}</h2>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_step_waits_for_a_non_blank_name() {
        assert_eq!(SetupStep::Welcome.next(""), Some(SetupStep::Name));
        assert_eq!(SetupStep::Name.next("   "), None);
        assert_eq!(SetupStep::Name.next("Hamza"), Some(SetupStep::Loading));
        assert_eq!(SetupStep::Loading.next("Hamza"), None);
    }
}
