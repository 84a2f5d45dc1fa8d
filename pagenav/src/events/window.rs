use iced::{Point, Size, Task};

use crate::app::{App, AppEvent};

pub(super) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    app.state.set_screen_size(size);
    Task::none()
}

pub(super) fn handle_cursor_moved(
    app: &mut App,
    position: Point,
) -> Task<AppEvent> {
    app.state.set_cursor(position);
    Task::none()
}
