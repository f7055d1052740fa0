use super::*;
use crate::assistant::{ask, AssistantConversation, MessageRole, Persona};

#[component]
pub(super) fn AssistantPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let locale = runtime.state.with_untracked(|s| s.context.locale);
    let strings = i18n::strings(locale);
    let conversation = create_rw_signal(AssistantConversation::new(Persona::Panel, locale));
    let draft = create_rw_signal(String::new());

    let submit = move || {
        let prompt = draft.get_untracked();
        let mut request = None;
        conversation.update(|c| request = c.submit(&prompt));
        let Some(request) = request else {
            return;
        };
        draft.set(String::new());
        let service = runtime.host.with_value(|host| host.assistant_service());
        spawn_local(async move {
            let reply = ask(service.as_ref(), &request).await;
            // The panel may have been closed while the request was in flight.
            let _ = conversation.try_update(|c| c.resolve(reply));
        });
    };

    view! {
        <aside class="assistant-panel" aria-label=strings.assistant_title>
            <header class="assistant-header">
                <span>{strings.assistant_title}</span>
                <button
                    type="button"
                    class="assistant-close"
                    aria-label="Close"
                    on:click=move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleOverlay(Overlay::Assistant))
                    }
                >
                    "×"
                </button>
            </header>
            <div class="assistant-messages" role="log" aria-live="polite">
                {move || {
                    conversation
                        .with(|c| c.messages().to_vec())
                        .into_iter()
                        .map(|message| {
                            let class = match message.role {
                                MessageRole::User => "assistant-message user",
                                MessageRole::Model => "assistant-message model",
                                MessageRole::Error => "assistant-message error",
                            };
                            view! { <div class=class>{message.text}</div> }
                        })
                        .collect_view()
                }}
                <Show when=move || conversation.with(AssistantConversation::is_pending) fallback=|| ()>
                    <div class="assistant-message model pending">{strings.assistant_thinking}</div>
                </Show>
            </div>
            <form
                class="assistant-input"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <input
                    type="text"
                    placeholder=strings.assistant_placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    prop:disabled=move || conversation.with(AssistantConversation::is_pending)
                />
                <button type="submit">"➤"</button>
            </form>
        </aside>
    }
}
