//! Pure window placement. The frame a window paints into depends only on whether it is maximized,
//! whether the viewport is phone-sized, and its free-floating geometry.

use crate::model::{Point, Size, WindowRecord};

/// Viewports narrower than this render every window full-bleed and disable dragging.
pub const MOBILE_BREAKPOINT_PX: i32 = 768;
pub const TOP_BAR_HEIGHT_PX: i32 = 32;
/// Width of the left dock rail on desktop-sized viewports.
pub const DESKTOP_DOCK_WIDTH_PX: i32 = 70;
/// Height of the bottom dock on phone-sized viewports.
pub const MOBILE_DOCK_HEIGHT_PX: i32 = 60;

pub fn is_mobile_viewport(viewport_width: i32) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

/// Space reserved by fixed shell chrome on each edge of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeInsets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl ChromeInsets {
    pub const DESKTOP: Self = Self {
        top: TOP_BAR_HEIGHT_PX,
        right: 0,
        bottom: 0,
        left: DESKTOP_DOCK_WIDTH_PX,
    };

    pub const MOBILE: Self = Self {
        top: TOP_BAR_HEIGHT_PX,
        right: 0,
        bottom: MOBILE_DOCK_HEIGHT_PX,
        left: 0,
    };

    fn css(self) -> String {
        format!(
            "position:fixed;top:{}px;right:{}px;bottom:{}px;left:{}px;",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowFrame {
    /// Below the status bar and above the bottom dock.
    FullBleedMobile,
    /// Everything not covered by desktop chrome.
    FullBleedMaximized,
    Floating { position: Point, size: Size },
}

impl WindowFrame {
    /// Inline style for the window's outer element.
    pub fn css(self, z_index: u32) -> String {
        let placement = match self {
            Self::FullBleedMobile => ChromeInsets::MOBILE.css(),
            Self::FullBleedMaximized => ChromeInsets::DESKTOP.css(),
            Self::Floating { position, size } => format!(
                "position:absolute;left:{}px;top:{}px;width:{}px;height:{}px;",
                position.x, position.y, size.width, size.height
            ),
        };
        format!("{placement}z-index:{z_index};")
    }

    pub fn is_full_bleed(self) -> bool {
        !matches!(self, Self::Floating { .. })
    }
}

/// Frame for a window. Stored geometry is only consulted for floating windows, so maximizing never
/// needs to touch it.
pub fn window_frame(is_maximized: bool, is_mobile: bool, position: Point, size: Size) -> WindowFrame {
    if is_mobile {
        WindowFrame::FullBleedMobile
    } else if is_maximized {
        WindowFrame::FullBleedMaximized
    } else {
        WindowFrame::Floating { position, size }
    }
}

/// Inline style for a window's outer element. Minimized and closed windows stay mounted but are
/// not painted, so they neither cover other windows nor take pointer events. `draft` is the
/// in-flight gesture rectangle, if any.
pub fn window_style(record: &WindowRecord, draft: Option<(Point, Size)>, is_mobile: bool) -> String {
    if !record.is_visible() {
        return "display:none;".to_string();
    }
    let (position, size) = draft.unwrap_or((record.position, record.size));
    window_frame(record.is_maximized, is_mobile, position, size).css(record.z_index)
}
