use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::window_manager::WindowStore;

/// Default free-floating window width for apps the catalog does not size.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
/// Default free-floating window height for apps the catalog does not size.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    About,
    Terminal,
    Projects,
    Youtube,
    Settings,
    Files,
    Calculator,
    Editor,
    Android,
    Chess,
    Ludo,
    Uno,
    GameCenter,
    DevStudio,
    Word,
    Excel,
    PowerPoint,
    Odoo,
}

impl AppId {
    pub const ALL: [AppId; 18] = [
        Self::About,
        Self::Terminal,
        Self::Projects,
        Self::Youtube,
        Self::Settings,
        Self::Files,
        Self::Calculator,
        Self::Editor,
        Self::Android,
        Self::Chess,
        Self::Ludo,
        Self::Uno,
        Self::GameCenter,
        Self::DevStudio,
        Self::Word,
        Self::Excel,
        Self::PowerPoint,
        Self::Odoo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Terminal => "terminal",
            Self::Projects => "projects",
            Self::Youtube => "youtube",
            Self::Settings => "settings",
            Self::Files => "files",
            Self::Calculator => "calculator",
            Self::Editor => "editor",
            Self::Android => "android",
            Self::Chess => "chess",
            Self::Ludo => "ludo",
            Self::Uno => "uno",
            Self::GameCenter => "gamecenter",
            Self::DevStudio => "devstudio",
            Self::Word => "word",
            Self::Excel => "excel",
            Self::PowerPoint => "powerpoint",
            Self::Odoo => "odoo",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown application id `{0}`")]
pub struct UnknownAppId(pub String);

impl FromStr for AppId {
    type Err = UnknownAppId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| UnknownAppId(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

/// Per-application window state. Closing is a state, never a removal, so a reopened window comes
/// back with its last geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: AppId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub position: Point,
    pub size: Size,
}

impl WindowRecord {
    pub fn closed(id: AppId, title: impl Into<String>, position: Point, size: Size) -> Self {
        Self {
            id,
            title: title.into(),
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index: 1,
            position,
            size,
        }
    }

    /// Whether the window currently paints on the desktop.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Self::Ar, Self::En, Self::Zh];

    /// BCP-47 tag applied to the document root.
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Language name used when instructing the assistant which language to answer in.
    pub fn english_name(self) -> &'static str {
        match self {
            Self::Ar => "Arabic",
            Self::En => "English",
            Self::Zh => "Chinese",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Self::Ar => "العربية",
            Self::En => "English",
            Self::Zh => "中文",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallpaperPreset {
    #[default]
    Jellyfish,
    Dark,
    Tech,
    Hacker,
}

impl WallpaperPreset {
    pub const ALL: [WallpaperPreset; 4] = [Self::Jellyfish, Self::Dark, Self::Tech, Self::Hacker];

    pub fn label(self) -> &'static str {
        match self {
            Self::Jellyfish => "Ubuntu Jellyfish",
            Self::Dark => "Dark Mode",
            Self::Tech => "Electronics Blue",
            Self::Hacker => "Terminal Green",
        }
    }

    /// CSS `background` value painted behind the desktop and lock screen.
    pub fn css_background(self) -> &'static str {
        match self {
            Self::Jellyfish => "linear-gradient(135deg, #5e2750 0%, #2c001e 50%, #e95420 100%)",
            Self::Dark => "#1a1a1a",
            Self::Tech => "linear-gradient(135deg, #0f2027 0%, #203a43 50%, #2c5364 100%)",
            Self::Hacker => "linear-gradient(135deg, #000000 0%, #113311 100%)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    SystemMenu,
    Calendar,
    AppGrid,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayFlags {
    pub system_menu: bool,
    pub calendar: bool,
    pub app_grid: bool,
    pub assistant: bool,
}

impl OverlayFlags {
    pub fn is_open(self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::SystemMenu => self.system_menu,
            Overlay::Calendar => self.calendar,
            Overlay::AppGrid => self.app_grid,
            Overlay::Assistant => self.assistant,
        }
    }

    pub fn set(&mut self, overlay: Overlay, open: bool) {
        match overlay {
            Overlay::SystemMenu => self.system_menu = open,
            Overlay::Calendar => self.calendar = open,
            Overlay::AppGrid => self.app_grid = open,
            Overlay::Assistant => self.assistant = open,
        }
    }

    /// Closes the popover-style overlays. The assistant is a docked panel and stays put.
    pub fn dismiss_popovers(&mut self) {
        self.system_menu = false;
        self.calendar = false;
        self.app_grid = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickSetting {
    Wifi(bool),
    Bluetooth(bool),
    Brightness(u8),
    Volume(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickSettings {
    pub wifi: bool,
    pub bluetooth: bool,
    pub brightness: u8,
    pub volume: u8,
}

impl Default for QuickSettings {
    fn default() -> Self {
        Self {
            wifi: true,
            bluetooth: false,
            brightness: 100,
            volume: 70,
        }
    }
}

impl QuickSettings {
    pub fn apply(&mut self, setting: QuickSetting) {
        match setting {
            QuickSetting::Wifi(on) => self.wifi = on,
            QuickSetting::Bluetooth(on) => self.bluetooth = on,
            QuickSetting::Brightness(level) => self.brightness = level.min(100),
            QuickSetting::Volume(level) => self.volume = level.min(100),
        }
    }

    /// Opacity of the black dimming layer that simulates screen brightness.
    pub fn dim_opacity(self) -> f32 {
        f32::from(100 - self.brightness.min(100)) / 100.0
    }
}

/// Desktop-wide settings and transient UI flags, passed down explicitly instead of living in
/// globals so each shell instance is isolated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShellContext {
    pub locale: Locale,
    pub dark_mode: bool,
    pub wallpaper: WallpaperPreset,
    pub overlays: OverlayFlags,
    pub quick_settings: QuickSettings,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShellMode {
    /// Persisted display name not read yet.
    #[default]
    Booting,
    Setup,
    Locked,
    Desktop,
    Mobile,
}

impl ShellMode {
    /// Whether window and app interactions are accepted.
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Desktop | Self::Mobile)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booting => "booting",
            Self::Setup => "setup",
            Self::Locked => "locked",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for ShellMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stack-of-one navigation used while the shell renders in mobile mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MobileShell {
    pub foreground: Option<AppId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub windows: WindowStore,
    pub context: ShellContext,
    pub mode: ShellMode,
    pub mobile: MobileShell,
}

impl DesktopState {
    pub fn new(windows: WindowStore) -> Self {
        Self {
            windows,
            context: ShellContext::default(),
            mode: ShellMode::default(),
            mobile: MobileShell::default(),
        }
    }
}
