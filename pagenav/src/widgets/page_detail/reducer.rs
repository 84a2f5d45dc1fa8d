use super::event::PageDetailIntent;
use super::state::PageDetailState;

/// Reduce a page detail intent into state updates.
pub(crate) fn reduce(state: &mut PageDetailState, intent: PageDetailIntent) {
    match intent {
        PageDetailIntent::SelectPage { page_id } => state.select(page_id),
        PageDetailIntent::SyncPages { pages } => state.sync(&pages),
    }
}
