use super::*;
use crate::{
    apps::render_app_contents,
    drag::{DragKind, DragSession},
    layout::window_style,
    model::WindowRecord,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Keeps a title-bar button press from starting a drag. Focus is handled by the button's click.
fn hold_title_drag(ev: web_sys::PointerEvent) {
    ev.stop_propagation();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleControl {
    Close,
    Minimize,
    Maximize,
}

impl TitleControl {
    fn action(self, app_id: AppId) -> DesktopAction {
        match self {
            Self::Close => DesktopAction::CloseWindow { app_id },
            Self::Minimize => DesktopAction::MinimizeWindow { app_id },
            Self::Maximize => DesktopAction::ToggleMaximize { app_id },
        }
    }
}

/// Actions for a title-bar button press. A background window is focused before the control acts.
fn title_control_actions(app_id: AppId, is_active: bool, control: TitleControl) -> Vec<DesktopAction> {
    let mut actions = Vec::with_capacity(2);
    if !is_active {
        actions.push(DesktopAction::FocusWindow { app_id });
    }
    actions.push(control.action(app_id));
    actions
}

#[component]
pub(super) fn DesktopWindow(app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let record = create_memo(move |_| state.with(|s| s.windows.record(app_id).cloned()));
    let is_active = create_memo(move |_| state.with(|s| s.windows.is_active(app_id)));
    let is_minimized =
        create_memo(move |_| record.with(|r| r.as_ref().is_some_and(|r| r.is_minimized)));
    let is_maximized =
        create_memo(move |_| record.with(|r| r.as_ref().is_some_and(|r| r.is_maximized)));
    let drag = create_rw_signal(None::<DragSession>);

    // A gesture cannot outlive the committed geometry it started from.
    create_effect(move |_| {
        let stale = record.with(|r| {
            drag.with_untracked(|d| {
                d.as_ref()
                    .is_some_and(|session| r.as_ref().map_or(true, |r| session.is_stale(r)))
            })
        });
        if stale {
            drag.set(None);
        }
    });

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        if drag.with_untracked(Option::is_none) {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        drag.update(|session| {
            if let Some(session) = session {
                session.update(pointer);
            }
        });
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        let Some(session) = drag.get_untracked() else {
            return;
        };
        drag.set(None);
        if let Some(action) = session.finish() {
            runtime.dispatch_action(action);
        }
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        if drag.with_untracked(Option::is_some) {
            drag.set(None);
        }
    });
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });

    let focus = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { app_id });
        }
    };
    let begin_drag = move |ev: web_sys::PointerEvent, kind: DragKind| {
        if !is_primary_press(&ev) {
            return;
        }
        let session = record.with_untracked(|r| {
            r.as_ref().and_then(|r| {
                DragSession::begin(
                    r,
                    kind,
                    pointer_from_pointer_event(&ev),
                    runtime.viewport_width.get_untracked(),
                )
            })
        });
        if let Some(session) = session {
            try_set_pointer_capture(&ev);
            ev.prevent_default();
            drag.set(Some(session));
        }
    };
    let toggle_maximize =
        move || runtime.dispatch_action(DesktopAction::ToggleMaximize { app_id });
    let press_control = move |ev: web_sys::MouseEvent, control: TitleControl| {
        stop_mouse_event(&ev);
        for action in title_control_actions(app_id, is_active.get_untracked(), control) {
            runtime.dispatch_action(action);
        }
    };

    let frame_style = move || {
        record.with(|r| {
            let Some(win) = r.as_ref() else {
                return "display:none;".to_string();
            };
            let draft = drag.with(|d| d.map(|s| (s.draft_position, s.draft_size)));
            window_style(win, draft, runtime.is_mobile_viewport())
        })
    };
    let title =
        move || record.with(|r| r.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let can_resize = move || {
        !is_maximized.get()
            && !runtime.is_mobile_viewport()
            && record.with(|r| r.as_ref().is_some_and(WindowRecord::is_visible))
    };

    // Mounted once per open window so app state survives minimize and restore.
    let contents = render_app_contents(app_id);

    view! {
        <section
            class="desktop-window"
            class:active=move || is_active.get()
            class:minimized=move || is_minimized.get()
            class:maximized=move || is_maximized.get()
            class:dragging=move || drag.with(Option::is_some)
            style=frame_style
            on:pointerdown=focus
            role="dialog"
            aria-label=title
            aria-hidden=move || if is_minimized.get() { "true" } else { "false" }
            data-app-id=app_id.as_str()
        >
            <header
                class="titlebar"
                on:pointerdown=move |ev| begin_drag(ev, DragKind::Move)
                on:dblclick=move |ev| {
                    stop_mouse_event(&ev);
                    toggle_maximize();
                }
            >
                <div class="titlebar-controls">
                    <button
                        type="button"
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:pointerdown=hold_title_drag
                        on:click=move |ev| press_control(ev, TitleControl::Close)
                    ></button>
                    <button
                        type="button"
                        class="titlebar-button minimize"
                        aria-label="Minimize window"
                        on:pointerdown=hold_title_drag
                        on:click=move |ev| press_control(ev, TitleControl::Minimize)
                    ></button>
                    <button
                        type="button"
                        class="titlebar-button maximize"
                        aria-label=move || {
                            if is_maximized.get() { "Restore window" } else { "Maximize window" }
                        }
                        on:pointerdown=hold_title_drag
                        on:click=move |ev| press_control(ev, TitleControl::Maximize)
                    ></button>
                </div>
                <div class="titlebar-title">{title}</div>
            </header>
            <div class="window-body">{contents}</div>
            <Show when=can_resize fallback=|| ()>
                <div
                    class="window-resize-grip"
                    aria-hidden="true"
                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                        ev.stop_propagation();
                        if !is_active.get_untracked() {
                            runtime.dispatch_action(DesktopAction::FocusWindow { app_id });
                        }
                        begin_drag(ev, DragKind::Resize);
                    }
                ></div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{DesktopState, Point, ShellMode, Size},
        reducer::reduce_desktop,
        window_manager::WindowStore,
    };

    #[test]
    fn background_control_press_focuses_first() {
        assert_eq!(
            title_control_actions(AppId::Files, false, TitleControl::Maximize),
            vec![
                DesktopAction::FocusWindow {
                    app_id: AppId::Files
                },
                DesktopAction::ToggleMaximize {
                    app_id: AppId::Files
                },
            ]
        );
        assert_eq!(
            title_control_actions(AppId::Files, true, TitleControl::Close),
            vec![DesktopAction::CloseWindow {
                app_id: AppId::Files
            }]
        );
    }

    #[test]
    fn maximizing_a_background_window_brings_it_to_front() {
        let mut state = DesktopState::new(WindowStore::seeded([AppId::Files, AppId::Terminal].map(
            |id| WindowRecord::closed(id, id.as_str(), Point::new(100, 100), Size::new(640, 480)),
        )));
        state.mode = ShellMode::Desktop;
        state.windows.open(AppId::Files);
        state.windows.open(AppId::Terminal);

        for action in title_control_actions(AppId::Files, false, TitleControl::Maximize) {
            reduce_desktop(&mut state, action).unwrap();
        }
        let files = state.windows.record(AppId::Files).unwrap();
        assert!(files.is_maximized);
        assert_eq!(state.windows.active(), Some(AppId::Files));
        assert!(files.z_index > state.windows.record(AppId::Terminal).unwrap().z_index);
    }
}
