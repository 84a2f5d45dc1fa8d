use iced::{Point, Size, Task};

use super::context_menu::ContextMenuAction;
use super::drag::PageMove;
use super::event::{PageTabsEffect, PageTabsEvent, PageTabsIntent};
use super::model::PageId;
use super::state::PageTabsState;

/// Environment signals the page tabs reducer reads but does not own.
pub(crate) struct PageTabsCtx<'a> {
    pub(crate) active_page_id: Option<&'a PageId>,
    /// Pointer position in viewport coordinates.
    pub(crate) cursor: Point,
    pub(crate) viewport: Size,
}

/// Wrap effects into the task the host runs, preserving order.
pub(crate) fn into_task(effects: Vec<PageTabsEffect>) -> Task<PageTabsEvent> {
    if effects.is_empty() {
        return Task::none();
    }

    Task::batch(
        effects
            .into_iter()
            .map(|effect| Task::done(PageTabsEvent::Effect(effect))),
    )
}

/// Apply an intent and return the effects it produces, in order.
pub(crate) fn apply(
    state: &mut PageTabsState,
    intent: PageTabsIntent,
    ctx: &PageTabsCtx<'_>,
) -> Vec<PageTabsEffect> {
    match intent {
        PageTabsIntent::TabPressed { index } => {
            if index < state.len() && !state.drag_mut().drag_start(index) {
                log::debug!("drag start at {index} ignored: gesture active");
            }
            Vec::new()
        },
        PageTabsIntent::SlotHovered { index } => {
            let len = state.len();
            state.drag_mut().drag_over(index.min(len));
            Vec::new()
        },
        PageTabsIntent::SlotReleased { index } => released(state, index),
        PageTabsIntent::DragEnded => match state.drag_mut().drag_end() {
            Some(pending) => commit_move(state, pending),
            None => Vec::new(),
        },
        PageTabsIntent::TabRightClicked { page_id }
        | PageTabsIntent::OptionsPressed { page_id } => {
            if state.page(&page_id).is_some() {
                state.open_context_menu(page_id, ctx.cursor, ctx.viewport);
            }
            Vec::new()
        },
        PageTabsIntent::ContextMenuDismiss => {
            state.clear_context_menu();
            Vec::new()
        },
        PageTabsIntent::ContextMenuAction(action) => {
            menu_action(state, action, ctx)
        },
        PageTabsIntent::AddPage { after_index } => {
            let page_id = state.add_page(after_index);
            vec![
                PageTabsEffect::PagesChanged {
                    pages: state.snapshot(),
                },
                PageTabsEffect::PageSelected { page_id },
            ]
        },
    }
}

fn released(state: &mut PageTabsState, index: usize) -> Vec<PageTabsEffect> {
    let drag = state.drag();
    let is_click = drag.dragged_index() == Some(index)
        && drag.over_index().is_none_or(|over| over == index);

    if let Some(pending) = state.drag_mut().drop_on_target() {
        return commit_move(state, pending);
    }

    if !is_click {
        return Vec::new();
    }
    match state.page_at(index) {
        Some(page) => vec![PageTabsEffect::PageSelected {
            page_id: page.id().clone(),
        }],
        None => Vec::new(),
    }
}

fn commit_move(
    state: &mut PageTabsState,
    pending: PageMove,
) -> Vec<PageTabsEffect> {
    if state.move_page(pending.from, pending.to) {
        changed(state)
    } else {
        Vec::new()
    }
}

fn menu_action(
    state: &mut PageTabsState,
    action: ContextMenuAction,
    ctx: &PageTabsCtx<'_>,
) -> Vec<PageTabsEffect> {
    let Some(menu) = state.take_context_menu() else {
        return Vec::new();
    };
    let page_id = menu.target;
    if state.page(&page_id).is_none() {
        return stale(&page_id);
    }

    match action {
        ContextMenuAction::SetAsFirst => {
            log::debug!("set as first page requested for {page_id}");
            Vec::new()
        },
        ContextMenuAction::Rename => rename(state, page_id),
        ContextMenuAction::Copy => {
            log::debug!("copy requested for {page_id}");
            Vec::new()
        },
        ContextMenuAction::Duplicate => match state.duplicate_page(&page_id) {
            Some(_) => changed(state),
            None => stale(&page_id),
        },
        ContextMenuAction::Delete => {
            delete(state, &page_id, ctx.active_page_id)
        },
    }
}

fn rename(state: &PageTabsState, page_id: PageId) -> Vec<PageTabsEffect> {
    let Some(page) = state.page(&page_id) else {
        return stale(&page_id);
    };

    log::info!("rename requested for page {page_id} ({})", page.title());
    vec![PageTabsEffect::RenameRequested {
        title: page.title().to_owned(),
        page_id,
    }]
}

fn delete(
    state: &mut PageTabsState,
    page_id: &PageId,
    active: Option<&PageId>,
) -> Vec<PageTabsEffect> {
    let Some(outcome) = state.delete_page(page_id, active) else {
        log::debug!("delete of {page_id} rejected");
        return Vec::new();
    };

    let mut effects = changed(state);
    if let Some(page_id) = outcome.next_active {
        effects.push(PageTabsEffect::PageSelected { page_id });
    }
    effects
}

fn changed(state: &PageTabsState) -> Vec<PageTabsEffect> {
    vec![PageTabsEffect::PagesChanged {
        pages: state.snapshot(),
    }]
}

fn stale(page_id: &PageId) -> Vec<PageTabsEffect> {
    log::debug!("page {page_id} is no longer present");
    Vec::new()
}
