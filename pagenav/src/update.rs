use iced::Task;

use super::{App, AppEvent};
use crate::events;

/// Thin dispatch: route each event to its owning handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    events::handle(app, event)
}
