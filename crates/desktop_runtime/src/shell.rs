//! Shell-level mode machine: setup wizard, lock screen, windowed desktop, and phone-style shell.
//!
//! ```text
//! Booting --hydrate(Some)--> Locked --unlock--> Desktop <--enter/exit mobile--> Mobile
//! Booting --hydrate(None)--> Setup  --complete--> Desktop
//! Desktop | Mobile --lock--> Locked
//! ```
//!
//! None of these transitions touch the window map.

use crate::{
    model::{AppId, DesktopState, ShellMode},
    reducer::ReducerError,
};

fn transition(
    state: &mut DesktopState,
    name: &'static str,
    allowed: &[ShellMode],
    next: ShellMode,
) -> Result<(), ReducerError> {
    if !allowed.contains(&state.mode) {
        return Err(ReducerError::InvalidTransition {
            transition: name,
            mode: state.mode,
        });
    }
    state.mode = next;
    Ok(())
}

/// Window, dock, and overlay interactions are only accepted on the desktop or phone shell.
pub fn require_interactive(state: &DesktopState) -> Result<(), ReducerError> {
    if state.mode.is_interactive() {
        Ok(())
    } else {
        Err(ReducerError::ShellNotInteractive { mode: state.mode })
    }
}

/// Applies the persisted display name read at boot.
pub fn hydrate(state: &mut DesktopState, display_name: Option<String>) -> Result<(), ReducerError> {
    let display_name = display_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());
    let next = if display_name.is_some() {
        ShellMode::Locked
    } else {
        ShellMode::Setup
    };
    transition(state, "hydrate", &[ShellMode::Booting], next)?;
    state.context.display_name = display_name;
    Ok(())
}

/// Finishes onboarding and returns the normalized name to persist.
pub fn complete_setup(state: &mut DesktopState, display_name: &str) -> Result<String, ReducerError> {
    let name = display_name.trim();
    if name.is_empty() {
        return Err(ReducerError::EmptyDisplayName);
    }
    transition(state, "complete_setup", &[ShellMode::Setup], ShellMode::Desktop)?;
    state.context.display_name = Some(name.to_string());
    Ok(name.to_string())
}

pub fn unlock(state: &mut DesktopState) -> Result<(), ReducerError> {
    transition(state, "unlock", &[ShellMode::Locked], ShellMode::Desktop)
}

pub fn lock(state: &mut DesktopState) -> Result<(), ReducerError> {
    transition(
        state,
        "lock",
        &[ShellMode::Desktop, ShellMode::Mobile],
        ShellMode::Locked,
    )?;
    state.context.overlays.dismiss_popovers();
    state.mobile.foreground = None;
    Ok(())
}

pub fn enter_mobile(state: &mut DesktopState) -> Result<(), ReducerError> {
    transition(state, "enter_mobile", &[ShellMode::Desktop], ShellMode::Mobile)?;
    state.context.overlays.dismiss_popovers();
    state.mobile.foreground = None;
    Ok(())
}

pub fn exit_mobile(state: &mut DesktopState) -> Result<(), ReducerError> {
    transition(state, "exit_mobile", &[ShellMode::Mobile], ShellMode::Desktop)?;
    state.mobile.foreground = None;
    Ok(())
}

/// Brings an app to the front of the phone shell. Returns `false` for the phone app itself,
/// which has nothing to show inside its own shell.
pub fn mobile_launch(state: &mut DesktopState, app_id: AppId) -> bool {
    if app_id == AppId::Android || state.mobile.foreground == Some(app_id) {
        return false;
    }
    state.mobile.foreground = Some(app_id);
    true
}

pub fn mobile_home(state: &mut DesktopState) -> bool {
    state.mobile.foreground.take().is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::WindowStore;

    fn state(mode: ShellMode) -> DesktopState {
        let mut state = DesktopState::new(WindowStore::default());
        state.mode = mode;
        state
    }

    #[test]
    fn first_visit_goes_through_setup_to_desktop() {
        let mut state = state(ShellMode::Booting);
        hydrate(&mut state, None).unwrap();
        assert_eq!(state.mode, ShellMode::Setup);
        assert_eq!(
            complete_setup(&mut state, "   "),
            Err(ReducerError::EmptyDisplayName)
        );
        assert_eq!(complete_setup(&mut state, "  Hamza ").unwrap(), "Hamza");
        assert_eq!(state.mode, ShellMode::Desktop);
        assert_eq!(state.context.display_name.as_deref(), Some("Hamza"));
    }

    #[test]
    fn returning_visit_starts_locked() {
        let mut state = state(ShellMode::Booting);
        hydrate(&mut state, Some("Hamza".to_string())).unwrap();
        assert_eq!(state.mode, ShellMode::Locked);
        unlock(&mut state).unwrap();
        assert_eq!(state.mode, ShellMode::Desktop);
    }

    #[test]
    fn blank_persisted_name_counts_as_missing() {
        let mut state = state(ShellMode::Booting);
        hydrate(&mut state, Some("  ".to_string())).unwrap();
        assert_eq!(state.mode, ShellMode::Setup);
        assert_eq!(state.context.display_name, None);
    }

    #[test]
    fn gated_modes_have_exactly_one_way_forward() {
        let mut setup = state(ShellMode::Setup);
        assert!(unlock(&mut setup).is_err());
        assert!(lock(&mut setup).is_err());
        assert!(enter_mobile(&mut setup).is_err());

        let mut locked = state(ShellMode::Locked);
        assert!(complete_setup(&mut locked, "x").is_err());
        assert!(enter_mobile(&mut locked).is_err());
        assert_eq!(
            require_interactive(&locked),
            Err(ReducerError::ShellNotInteractive {
                mode: ShellMode::Locked
            })
        );
    }

    #[test]
    fn mobile_round_trip_and_lock() {
        let mut state = state(ShellMode::Desktop);
        enter_mobile(&mut state).unwrap();
        assert!(mobile_launch(&mut state, AppId::Chess));
        assert!(!mobile_launch(&mut state, AppId::Android));
        assert_eq!(state.mobile.foreground, Some(AppId::Chess));
        lock(&mut state).unwrap();
        assert_eq!(state.mode, ShellMode::Locked);
        assert_eq!(state.mobile.foreground, None);
    }

    #[test]
    fn mobile_home_clears_foreground() {
        let mut state = state(ShellMode::Mobile);
        assert!(!mobile_home(&mut state));
        mobile_launch(&mut state, AppId::Uno);
        assert!(mobile_home(&mut state));
        exit_mobile(&mut state).unwrap();
        assert_eq!(state.mode, ShellMode::Desktop);
    }
}
