use iced::{Point, Size};

/// Window geometry and pointer snapshot read by the widgets.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) screen_size: Size,
    /// Last pointer position in viewport coordinates.
    pub(crate) cursor: Point,
}

impl State {
    pub(crate) fn new(screen_size: Size) -> Self {
        Self {
            screen_size,
            cursor: Point::ORIGIN,
        }
    }

    /// Update the screen size after a window resize.
    pub(crate) fn set_screen_size(&mut self, size: Size) {
        self.screen_size = size;
    }

    pub(crate) fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
    }
}
