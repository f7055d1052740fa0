//! Lightweight app views. Each one renders static content and follows the shell locale.

use leptos::*;

use crate::{i18n, model::AppId, runtime_context::use_desktop_runtime};

fn locale_signal() -> Signal<crate::model::Locale> {
    let runtime = use_desktop_runtime();
    Signal::derive(move || runtime.state.with(|s| s.context.locale))
}

pub(super) fn about() -> View {
    let locale = locale_signal();
    view! {
        <div class="app-shell app-about">
            <header class="about-hero">
                <div class="about-avatar" aria-hidden="true">"H"</div>
                <div>
                    <h1>{move || i18n::app_title(AppId::About, locale.get())}</h1>
                    <p>"Electronics, Linux and Windows enthusiast. 11 years old."</p>
                </div>
            </header>
            <div class="about-cards">
                <a
                    class="about-card"
                    href="https://youtube.com/@hamzaellakany-hf5kw"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <h3>"YouTube"</h3>
                    <p>"Hamza Full HD"</p>
                </a>
                <a
                    class="about-card"
                    href="https://github.com/ellakanyhamza8-web"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <h3>"GitHub"</h3>
                    <p>"ellakanyhamza8-web"</p>
                </a>
            </div>
            <p class="about-contact" dir="ltr">"ellakanyhamza8@gmail.com"</p>
        </div>
    }
    .into_view()
}

pub(super) fn youtube() -> View {
    view! {
        <div class="app-shell app-browser">
            <div class="app-toolbar" role="group" aria-label="Address bar">
                <input
                    class="browser-address"
                    type="text"
                    readonly=true
                    value="https://youtube.com/@hamzaellakany-hf5kw"
                />
            </div>
            <div class="browser-page">
                <h2>"Hamza Full HD"</h2>
                <a
                    class="app-action"
                    href="https://youtube.com/@hamzaellakany-hf5kw"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Open channel"
                </a>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn code_editor(app_id: AppId) -> View {
    let locale = locale_signal();
    let file_name = match app_id {
        AppId::DevStudio => "main.rs",
        _ => "portfolio.tsx",
    };
    view! {
        <div class="app-shell app-code-editor" data-app-id=app_id.as_str()>
            <aside class="code-explorer">
                <div class="code-explorer-title">"EXPLORER"</div>
                <div class="code-file active">{file_name}</div>
            </aside>
            <section class="code-pane">
                <div class="code-tab">{file_name}</div>
                <pre class="code-body">
                    "// "
                    {move || i18n::app_title(app_id, locale.get())}
                    "\nfn main() {\n    println!(\"Hello from HamzaOS\");\n}\n"
                </pre>
            </section>
        </div>
    }
    .into_view()
}

pub(super) fn office(app_id: AppId) -> View {
    let locale = locale_signal();
    let accent = match app_id {
        AppId::Word => "#2b579a",
        AppId::Excel => "#217346",
        _ => "#d24726",
    };
    view! {
        <div class="app-shell app-office" data-app-id=app_id.as_str()>
            <div class="office-ribbon" style=format!("background:{accent};")>
                {move || i18n::app_title(app_id, locale.get())}
            </div>
            <div class="office-document" contenteditable="true"></div>
        </div>
    }
    .into_view()
}

pub(super) fn generic(app_id: AppId) -> View {
    let locale = locale_signal();
    view! {
        <div class="app-shell app-placeholder" data-app-id=app_id.as_str()>
            <h2>{move || i18n::app_title(app_id, locale.get())}</h2>
            <p>{move || i18n::strings(locale.get()).placeholder_body}</p>
        </div>
    }
    .into_view()
}
