//! Events a content list reports to its host.
//!
//! Handlers push events onto the list's queue; the host drains the queue
//! after each interaction with [`ContentList::drain_events`] and reacts
//! (updates its selection, fetches a page, shows checkboxes).
//!
//! [`ContentList::drain_events`]: crate::ContentList::drain_events

use crate::pagination::PaginatorState;

/// Identifies which kind of event was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEventKind {
    /// Paginator changed page or page size
    PageChange,
    /// Checked rows changed
    SelectionChange,
    /// Long press revealed the selection checkboxes
    SelectionRevealed,
}

/// An event emitted by a content list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T> {
    /// The user moved to another page; the host should refetch rows.
    PageChange(PaginatorState),
    /// The checked rows, in row order.
    SelectionChange(Vec<T>),
    /// Selection checkboxes became visible after a long press.
    SelectionRevealed,
}

impl<T> ListEvent<T> {
    pub fn kind(&self) -> ListEventKind {
        match self {
            ListEvent::PageChange(_) => ListEventKind::PageChange,
            ListEvent::SelectionChange(_) => ListEventKind::SelectionChange,
            ListEvent::SelectionRevealed => ListEventKind::SelectionRevealed,
        }
    }
}

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Interaction was ignored (list disabled, row not selectable, ...).
    Ignored,
    /// Interaction changed state or queued an event.
    Consumed,
}

impl EventResult {
    /// Check if the interaction was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
