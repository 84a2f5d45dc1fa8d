/// Reorder gesture state for the tab strip.
///
/// Slot indices address pages in list order; the slot equal to the page
/// count is the trailing "append" slot behind the last page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum DragState {
    #[default]
    Idle,
    Dragging {
        dragged: usize,
    },
    DraggingOver {
        dragged: usize,
        over: usize,
    },
}

/// A reorder to commit against the page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageMove {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

/// Side of a slot where the drop indicator line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndicatorEdge {
    Leading,
    Trailing,
}

/// Drop indicator placement for the current hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DropIndicator {
    pub(crate) slot: usize,
    pub(crate) edge: IndicatorEdge,
}

impl DragState {
    pub(crate) fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub(crate) fn dragged_index(&self) -> Option<usize> {
        match *self {
            Self::Idle => None,
            Self::Dragging { dragged } | Self::DraggingOver { dragged, .. } => {
                Some(dragged)
            },
        }
    }

    pub(crate) fn over_index(&self) -> Option<usize> {
        match *self {
            Self::DraggingOver { over, .. } => Some(over),
            _ => None,
        }
    }

    /// Begin a gesture. Returns `false` when another gesture is in flight.
    pub(crate) fn drag_start(&mut self, index: usize) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Self::Dragging { dragged: index };
        true
    }

    /// Track the hovered slot. Ignored while idle.
    pub(crate) fn drag_over(&mut self, index: usize) {
        if let Some(dragged) = self.dragged_index() {
            *self = Self::DraggingOver {
                dragged,
                over: index,
            };
        }
    }

    /// Release over a slot: yields the move to commit, if any, and resets.
    pub(crate) fn drop_on_target(&mut self) -> Option<PageMove> {
        self.finish()
    }

    /// Terminal transition of every gesture. After a drop this is a no-op.
    pub(crate) fn drag_end(&mut self) -> Option<PageMove> {
        self.finish()
    }

    fn finish(&mut self) -> Option<PageMove> {
        let pending = match *self {
            Self::DraggingOver { dragged, over } if dragged != over => {
                Some(PageMove {
                    from: dragged,
                    to: over,
                })
            },
            _ => None,
        };
        *self = Self::Idle;
        pending
    }

    /// Where the drop indicator renders while hovering, if anywhere.
    ///
    /// Hidden when the hover would not move anything, including the last
    /// page hovering the trailing slot.
    pub(crate) fn indicator(&self, page_count: usize) -> Option<DropIndicator> {
        let Self::DraggingOver { dragged, over } = *self else {
            return None;
        };
        if over.min(page_count.saturating_sub(1)) == dragged {
            return None;
        }

        let edge = if over < dragged {
            IndicatorEdge::Leading
        } else {
            IndicatorEdge::Trailing
        };
        Some(DropIndicator { slot: over, edge })
    }

    /// Whether the page at `index` is the one being carried.
    pub(crate) fn is_carrying(&self, index: usize) -> bool {
        matches!(*self, Self::DraggingOver { dragged, .. } if dragged == index)
    }
}
