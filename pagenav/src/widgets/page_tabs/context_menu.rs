use iced::{Point, Size};

use super::model::PageId;

/// Fixed width of the page options menu panel.
pub(crate) const MENU_WIDTH: f32 = 240.0;

/// Actions offered by the page options menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContextMenuAction {
    SetAsFirst,
    Rename,
    Copy,
    Duplicate,
    Delete,
}

/// An open page options menu.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ContextMenuState {
    pub(crate) target: PageId,
    pub(crate) position: Point,
}

/// How the menu is placed relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MenuPlacement {
    /// Viewports narrower than this pin the menu to the right edge.
    pub(crate) narrow_viewport_width: f32,
    /// Gap between the pinned menu and the right viewport edge.
    pub(crate) right_inset: f32,
}

impl Default for MenuPlacement {
    fn default() -> Self {
        Self {
            narrow_viewport_width: 640.0,
            right_inset: 20.0,
        }
    }
}

impl MenuPlacement {
    pub(crate) fn is_narrow(&self, viewport: Size) -> bool {
        viewport.width < self.narrow_viewport_width
    }

    /// Top-left corner of the menu for a pointer at `cursor`.
    pub(crate) fn anchor(&self, cursor: Point, viewport: Size) -> Point {
        if self.is_narrow(viewport) {
            let x = (viewport.width - self.right_inset - MENU_WIDTH).max(0.0);
            Point::new(x, cursor.y)
        } else {
            cursor
        }
    }
}

impl ContextMenuState {
    /// Open a menu for `target`, computing its position once.
    pub(crate) fn open(
        target: PageId,
        cursor: Point,
        viewport: Size,
        placement: &MenuPlacement,
    ) -> Self {
        Self {
            target,
            position: placement.anchor(cursor, viewport),
        }
    }
}
