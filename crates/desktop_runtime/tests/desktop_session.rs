use desktop_runtime::{
    drag::{DragKind, DragSession},
    AppId, AppRegistry, DesktopAction, DesktopState, DesktopStore, Locale, Point, RuntimeEffect,
    ShellMode, Size,
};
use pretty_assertions::assert_eq;

fn booted_store() -> DesktopStore {
    let registry = AppRegistry::load().expect("built-in catalog");
    DesktopStore::new(DesktopState::new(registry.initial_store(Locale::default())))
}

fn dispatch(store: &mut DesktopStore, action: DesktopAction) -> Vec<RuntimeEffect> {
    store.dispatch(action).expect("action accepted")
}

#[test]
fn first_visit_runs_setup_then_lands_on_desktop() {
    let mut store = booted_store();
    assert_eq!(store.state().mode, ShellMode::Booting);

    dispatch(&mut store, DesktopAction::HydrateDisplayName(None));
    assert_eq!(store.state().mode, ShellMode::Setup);
    assert!(store
        .dispatch(DesktopAction::AppClicked {
            app_id: AppId::Terminal
        })
        .is_err());

    let effects = dispatch(
        &mut store,
        DesktopAction::CompleteSetup {
            display_name: "  Hamza ".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![RuntimeEffect::PersistDisplayName("Hamza".to_string())]
    );
    assert_eq!(store.state().mode, ShellMode::Desktop);
    assert_eq!(store.state().windows.active(), Some(AppId::About));
}

#[test]
fn returning_visitor_unlocks_into_the_boot_windows() {
    let mut store = booted_store();
    dispatch(
        &mut store,
        DesktopAction::HydrateDisplayName(Some("Hamza".to_string())),
    );
    assert_eq!(store.state().mode, ShellMode::Locked);

    dispatch(&mut store, DesktopAction::Unlock);
    assert_eq!(store.state().mode, ShellMode::Desktop);
    assert_eq!(
        store.state().context.display_name.as_deref(),
        Some("Hamza")
    );
}

#[test]
fn dock_clicks_cycle_open_minimize_restore() {
    let mut store = booted_store();
    dispatch(&mut store, DesktopAction::HydrateDisplayName(None));
    dispatch(
        &mut store,
        DesktopAction::CompleteSetup {
            display_name: "Hamza".to_string(),
        },
    );
    let click = DesktopAction::AppClicked {
        app_id: AppId::Calculator,
    };

    dispatch(&mut store, click.clone());
    let calculator = store.state().windows.record(AppId::Calculator).unwrap();
    assert!(calculator.is_visible());
    assert_eq!(calculator.size, Size::new(300, 450));
    assert_eq!(store.state().windows.active(), Some(AppId::Calculator));

    dispatch(&mut store, click.clone());
    assert!(store.state().windows.record(AppId::Calculator).unwrap().is_minimized);
    assert_eq!(store.state().windows.active(), None);

    dispatch(&mut store, click);
    assert!(store.state().windows.record(AppId::Calculator).unwrap().is_visible());
    assert_eq!(store.state().windows.active(), Some(AppId::Calculator));
    assert!(store.state().windows.invariants_hold());
}

#[test]
fn drag_gesture_commits_once_and_survives_reopen() {
    let mut store = booted_store();
    dispatch(
        &mut store,
        DesktopAction::HydrateDisplayName(Some("Hamza".to_string())),
    );
    dispatch(&mut store, DesktopAction::Unlock);

    let record = store.state().windows.record(AppId::About).unwrap().clone();
    let mut session =
        DragSession::begin(&record, DragKind::Move, Point::new(200, 200), 1280).expect("draggable");
    session.update(Point::new(230, 210));
    session.update(Point::new(260, 240));
    let commit = session.finish().expect("moved");
    dispatch(&mut store, commit);

    let moved = Point::new(record.position.x + 60, record.position.y + 40);
    assert_eq!(
        store.state().windows.record(AppId::About).unwrap().position,
        moved
    );

    dispatch(
        &mut store,
        DesktopAction::CloseWindow {
            app_id: AppId::About,
        },
    );
    dispatch(
        &mut store,
        DesktopAction::AppClicked {
            app_id: AppId::About,
        },
    );
    assert_eq!(
        store.state().windows.record(AppId::About).unwrap().position,
        moved
    );
}

#[test]
fn locale_switch_retitles_windows_and_updates_document() {
    let mut store = booted_store();
    dispatch(
        &mut store,
        DesktopAction::HydrateDisplayName(Some("Hamza".to_string())),
    );
    dispatch(&mut store, DesktopAction::Unlock);

    let effects = dispatch(&mut store, DesktopAction::SetLocale(Locale::En));
    assert_eq!(effects, vec![RuntimeEffect::ApplyDocumentLocale(Locale::En)]);
    assert_eq!(
        store.state().windows.record(AppId::Files).unwrap().title,
        "File Explorer"
    );
}

#[test]
fn android_app_switches_to_phone_shell_and_back() {
    let mut store = booted_store();
    dispatch(
        &mut store,
        DesktopAction::HydrateDisplayName(Some("Hamza".to_string())),
    );
    dispatch(&mut store, DesktopAction::Unlock);

    dispatch(
        &mut store,
        DesktopAction::AppClicked {
            app_id: AppId::Android,
        },
    );
    assert_eq!(store.state().mode, ShellMode::Mobile);

    dispatch(
        &mut store,
        DesktopAction::AppClicked {
            app_id: AppId::Terminal,
        },
    );
    assert_eq!(store.state().mobile.foreground, Some(AppId::Terminal));

    dispatch(&mut store, DesktopAction::MobileHome);
    assert_eq!(store.state().mobile.foreground, None);

    dispatch(&mut store, DesktopAction::ExitMobile);
    assert_eq!(store.state().mode, ShellMode::Desktop);
}
