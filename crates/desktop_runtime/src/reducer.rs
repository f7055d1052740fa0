//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::{
    i18n,
    model::{
        AppId, DesktopState, Locale, Overlay, Point, QuickSetting, ShellMode, Size,
        WallpaperPreset, WindowRecord,
    },
    shell,
    window_manager::{OpenOutcome, FALLBACK_WINDOW_POSITION},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Dock, desktop icon, or app-grid click.
    AppClicked { app_id: AppId },
    /// Pointer-down anywhere inside a visible window.
    FocusWindow { app_id: AppId },
    CloseWindow { app_id: AppId },
    MinimizeWindow { app_id: AppId },
    ToggleMaximize { app_id: AppId },
    /// Commit of a finished move gesture.
    SetWindowPosition { app_id: AppId, position: Point },
    /// Commit of a finished resize gesture.
    SetWindowSize { app_id: AppId, size: Size },
    SetLocale(Locale),
    SetDarkMode(bool),
    SetWallpaper(WallpaperPreset),
    ToggleOverlay(Overlay),
    /// Click on empty desktop area.
    DismissOverlays,
    SetQuickSetting(QuickSetting),
    CompleteSetup { display_name: String },
    Unlock,
    Lock,
    EnterMobile,
    ExitMobile,
    /// Phone shell home button.
    MobileHome,
    /// Result of the boot-time preference read.
    HydrateDisplayName(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    PersistDisplayName(String),
    /// Set `lang`/`dir` on the document root.
    ApplyDocumentLocale(Locale),
    /// Toggle the `dark` class on the document root.
    ApplyColorScheme(bool),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that the current shell mode does not accept.
pub enum ReducerError {
    #[error("shell is not interactive in `{mode}` mode")]
    ShellNotInteractive { mode: ShellMode },
    #[error("`{transition}` is not allowed in `{mode}` mode")]
    InvalidTransition {
        transition: &'static str,
        mode: ShellMode,
    },
    #[error("display name must not be empty")]
    EmptyDisplayName,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Window operations never fail: an id without a usable record leaves the state untouched.
///
/// # Errors
///
/// Returns [`ReducerError`] when the action is not accepted in the current [`ShellMode`]
/// (e.g. a dock click behind the lock screen) or when setup is completed with a blank name.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::AppClicked { app_id } => {
            shell::require_interactive(state)?;
            state.context.overlays.app_grid = false;
            if state.mode == ShellMode::Mobile {
                shell::mobile_launch(state, app_id);
            } else if app_id == AppId::Android {
                shell::enter_mobile(state)?;
            } else {
                let locale = state.context.locale;
                let outcome = state.windows.open_with(app_id, || {
                    WindowRecord::closed(
                        app_id,
                        i18n::app_title(app_id, locale),
                        FALLBACK_WINDOW_POSITION,
                        Size::default(),
                    )
                });
                if outcome != OpenOutcome::Minimized {
                    state.context.overlays.dismiss_popovers();
                }
            }
        }
        DesktopAction::FocusWindow { app_id } => {
            shell::require_interactive(state)?;
            if state.windows.focus(app_id) {
                state.context.overlays.dismiss_popovers();
            }
        }
        DesktopAction::CloseWindow { app_id } => {
            shell::require_interactive(state)?;
            // The phone shell only backgrounds its foreground app; desktop windows stay as they were.
            if state.mode == ShellMode::Mobile {
                if state.mobile.foreground == Some(app_id) {
                    state.mobile.foreground = None;
                }
            } else {
                state.windows.close(app_id);
            }
        }
        DesktopAction::MinimizeWindow { app_id } => {
            shell::require_interactive(state)?;
            state.windows.minimize(app_id);
        }
        DesktopAction::ToggleMaximize { app_id } => {
            shell::require_interactive(state)?;
            state.windows.toggle_maximize(app_id);
        }
        DesktopAction::SetWindowPosition { app_id, position } => {
            shell::require_interactive(state)?;
            state.windows.set_position(app_id, position);
        }
        DesktopAction::SetWindowSize { app_id, size } => {
            shell::require_interactive(state)?;
            state.windows.set_size(app_id, size);
        }
        DesktopAction::SetLocale(locale) => {
            state.context.locale = locale;
            state
                .windows
                .retitle_all(|id| i18n::app_title(id, locale).to_string());
            effects.push(RuntimeEffect::ApplyDocumentLocale(locale));
        }
        DesktopAction::SetDarkMode(enabled) => {
            state.context.dark_mode = enabled;
            effects.push(RuntimeEffect::ApplyColorScheme(enabled));
        }
        DesktopAction::SetWallpaper(wallpaper) => {
            state.context.wallpaper = wallpaper;
        }
        DesktopAction::ToggleOverlay(overlay) => {
            shell::require_interactive(state)?;
            let overlays = &mut state.context.overlays;
            let open = !overlays.is_open(overlay);
            if open && overlay != Overlay::Assistant {
                overlays.dismiss_popovers();
            }
            overlays.set(overlay, open);
        }
        DesktopAction::DismissOverlays => {
            state.context.overlays.dismiss_popovers();
        }
        DesktopAction::SetQuickSetting(setting) => {
            state.context.quick_settings.apply(setting);
        }
        DesktopAction::CompleteSetup { display_name } => {
            let name = shell::complete_setup(state, &display_name)?;
            effects.push(RuntimeEffect::PersistDisplayName(name));
        }
        DesktopAction::Unlock => shell::unlock(state)?,
        DesktopAction::Lock => shell::lock(state)?,
        DesktopAction::EnterMobile => shell::enter_mobile(state)?,
        DesktopAction::ExitMobile => shell::exit_mobile(state)?,
        DesktopAction::MobileHome => {
            shell::require_interactive(state)?;
            shell::mobile_home(state);
        }
        DesktopAction::HydrateDisplayName(display_name) => {
            shell::hydrate(state, display_name)?;
        }
    }

    Ok(effects)
}
