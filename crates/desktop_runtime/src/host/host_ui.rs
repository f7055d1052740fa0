use crate::model::Locale;

/// Width reported on native builds, where there is no viewport.
const FALLBACK_VIEWPORT_WIDTH: i32 = 1280;

pub(super) fn apply_document_locale(locale: Locale) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        let _ = root.set_attribute("lang", locale.html_lang());
        let _ = root.set_attribute("dir", locale.dir());
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locale;
}

pub(super) fn apply_color_scheme(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force("dark", dark) {
            leptos::logging::warn!("toggle dark class failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dark;
}

pub(super) fn viewport_width() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT_WIDTH);
        }
    }

    FALLBACK_VIEWPORT_WIDTH
}
