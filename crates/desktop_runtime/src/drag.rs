//! Pointer gestures that are tracked locally by a window and committed to the store on release.
//!
//! The session is the optimistic tier: every pointer move updates only the draft rectangle, and
//! [`DragSession::finish`] produces the single store mutation for the whole gesture.

use crate::{
    layout::is_mobile_viewport,
    model::{AppId, Point, Size, WindowRecord},
    reducer::DesktopAction,
};

pub const MIN_WINDOW_WIDTH: i32 = 220;
pub const MIN_WINDOW_HEIGHT: i32 = 140;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Title-bar drag.
    Move,
    /// Bottom-right grip drag.
    Resize,
}

/// Whether a pointer-down on the title bar (or grip) may start a gesture.
pub fn can_begin_drag(record: &WindowRecord, viewport_width: i32) -> bool {
    record.is_visible() && !record.is_maximized && !is_mobile_viewport(viewport_width)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub kind: DragKind,
    pointer_start: Point,
    origin: Point,
    origin_size: Size,
    /// Origin rendered while the gesture is in flight.
    pub draft_position: Point,
    /// Size rendered while the gesture is in flight.
    pub draft_size: Size,
}

impl DragSession {
    /// Starts a gesture from the record's committed geometry, or `None` when dragging is not
    /// allowed for this window right now.
    pub fn begin(
        record: &WindowRecord,
        kind: DragKind,
        pointer: Point,
        viewport_width: i32,
    ) -> Option<Self> {
        if !can_begin_drag(record, viewport_width) {
            return None;
        }
        Some(Self {
            app_id: record.id,
            kind,
            pointer_start: pointer,
            origin: record.position,
            origin_size: record.size,
            draft_position: record.position,
            draft_size: record.size,
        })
    }

    /// Follows the latest pointer position.
    pub fn update(&mut self, pointer: Point) {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        match self.kind {
            DragKind::Move => {
                self.draft_position = Point::new(self.origin.x + dx, self.origin.y + dy);
            }
            DragKind::Resize => {
                self.draft_size = Size::new(
                    (self.origin_size.width + dx).max(MIN_WINDOW_WIDTH),
                    (self.origin_size.height + dy).max(MIN_WINDOW_HEIGHT),
                );
            }
        }
    }

    /// Whether the committed record moved on without this gesture (hidden, maximized, or placed
    /// from elsewhere), in which case the draft must be dropped.
    pub fn is_stale(&self, record: &WindowRecord) -> bool {
        record.id != self.app_id
            || !record.is_visible()
            || record.is_maximized
            || record.position != self.origin
            || record.size != self.origin_size
    }

    /// The store mutation for the finished gesture, or `None` if the pointer never moved it.
    pub fn finish(self) -> Option<DesktopAction> {
        match self.kind {
            DragKind::Move if self.draft_position != self.origin => {
                Some(DesktopAction::SetWindowPosition {
                    app_id: self.app_id,
                    position: self.draft_position,
                })
            }
            DragKind::Resize if self.draft_size != self.origin_size => {
                Some(DesktopAction::SetWindowSize {
                    app_id: self.app_id,
                    size: self.draft_size,
                })
            }
            _ => None,
        }
    }
}
