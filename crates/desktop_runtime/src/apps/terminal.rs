//! Terminal app view over [`TerminalSession`].

use leptos::*;

use crate::{
    assistant::ask,
    model::AppId,
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
    terminal::{LineKind, TerminalOutcome, TerminalSession},
};

const PROMPT: &str = "hamza@hamza-desktop:~$";

#[component]
pub fn TerminalApp() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let locale = runtime.state.with_untracked(|s| s.context.locale);
    let session = create_rw_signal(TerminalSession::new(locale));
    let input = create_rw_signal(String::new());

    let run = move || {
        let line = input.get_untracked();
        let mut outcome = TerminalOutcome::Continue;
        session.update(|s| outcome = s.run(&line));
        input.set(String::new());
        match outcome {
            TerminalOutcome::Continue => {}
            TerminalOutcome::Exit => runtime.dispatch_action(DesktopAction::CloseWindow {
                app_id: AppId::Terminal,
            }),
            TerminalOutcome::Ask(request) => {
                let service = runtime.host.with_value(|host| host.assistant_service());
                spawn_local(async move {
                    let reply = ask(service.as_ref(), &request).await;
                    let _ = session.try_update(|s| s.finish_ask(reply));
                });
            }
        }
    };

    view! {
        <div class="app-shell app-terminal" dir="ltr">
            <div class="terminal-output" role="log" aria-live="polite">
                {move || {
                    session
                        .with(|s| s.lines().to_vec())
                        .into_iter()
                        .map(|line| match line.kind {
                            LineKind::Command => {
                                view! {
                                    <div class="terminal-line command">
                                        <span class="terminal-prompt">{PROMPT}</span>
                                        " "
                                        {line.text}
                                    </div>
                                }
                            }
                            LineKind::Output => {
                                view! { <div class="terminal-line output">{line.text}</div> }
                            }
                            LineKind::Error => {
                                view! { <div class="terminal-line error">{line.text}</div> }
                            }
                        })
                        .collect_view()
                }}
            </div>
            <form
                class="terminal-input-row"
                on:submit=move |ev| {
                    ev.prevent_default();
                    run();
                }
            >
                <label class="terminal-prompt" for="terminal-input">{PROMPT}</label>
                <input
                    id="terminal-input"
                    type="text"
                    class="terminal-input"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || input.get()
                    prop:disabled=move || session.with(TerminalSession::is_processing)
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
            </form>
        </div>
    }
}
