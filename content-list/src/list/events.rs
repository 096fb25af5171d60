//! Interaction handling for the ContentList component.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Weak};

use crate::error::ListError;
use crate::events::{EventResult, ListEvent};
use crate::pagination::PaginatorState;
use crate::row::ListRow;

use super::state::{ContentList, ListInner};

impl<T: ListRow> ContentList<T> {
    /// Check or uncheck every selectable row.
    ///
    /// Rows refused by the `can_select` predicate keep their state. Emits a
    /// selection change even when nothing changed.
    pub fn toggle_select_all(&self, checked: bool) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if !guard.interactive() {
            return EventResult::Ignored;
        }

        let inner = &mut *guard;
        let can_select = Arc::clone(&inner.can_select);
        inner
            .selection
            .toggle_select_all(&inner.rows, checked, |row| can_select(row));
        inner.notify_selection_change();
        log::debug!(
            "{}: select all -> {} ({} checked)",
            self.id(),
            checked,
            inner.selection.checked_count()
        );
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Check or uncheck the row at `index`.
    pub fn select_item(&self, index: usize, checked: bool) -> Result<EventResult, ListError> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(EventResult::Ignored);
        };

        let len = guard.rows.len();
        let Some(row) = guard.rows.get(index) else {
            return Err(ListError::RowOutOfRange { index, len });
        };
        if !guard.interactive() || !(guard.can_select)(row) {
            return Ok(EventResult::Ignored);
        }

        let inner = &mut *guard;
        let can_select = Arc::clone(&inner.can_select);
        inner
            .selection
            .toggle_one(&inner.rows, index, checked, |row| can_select(row));
        inner.notify_selection_change();
        self.dirty.store(true, Ordering::SeqCst);
        Ok(EventResult::Consumed)
    }

    /// Relay a paginator change to the host.
    ///
    /// The list keeps its rows; the host refetches and calls `set_rows`.
    pub fn on_page_change(&self, state: PaginatorState) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        log::debug!(
            "{}: page change to {} (first={}, rows={})",
            self.id(),
            state.page,
            state.first,
            state.rows
        );
        guard.events.push_back(ListEvent::PageChange(state));
        EventResult::Consumed
    }

    /// A touch started on a row.
    ///
    /// With `need_press` set and checkboxes still hidden, arms the long-press
    /// timer, replacing any timer already pending.
    pub fn on_touch_start(&self) -> Result<EventResult, ListError> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(EventResult::Ignored);
        };
        if !guard.config.need_press || guard.mobile_pressed {
            return Ok(EventResult::Ignored);
        }

        let delay = guard.config.press_delay();
        guard.press_generation += 1;
        let generation = guard.press_generation;
        let weak = Arc::downgrade(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let id = self.id();
        guard.press_timer.arm(delay, move || {
            if reveal(&weak, generation) {
                log::debug!("{}: long press revealed selection", id);
                dirty.store(true, Ordering::SeqCst);
            }
        })?;
        log::trace!("{}: press timer armed ({:?})", self.id(), delay);
        Ok(EventResult::Consumed)
    }

    /// A touch ended; cancels a pending long press.
    pub fn on_touch_end(&self) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if !guard.config.need_press {
            return EventResult::Ignored;
        }
        // A timer past its sleep may still be waiting for the lock.
        guard.press_generation += 1;
        if guard.press_timer.cancel() {
            log::trace!("{}: press timer cancelled", self.id());
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    /// Whether a long press is in progress.
    pub fn is_press_pending(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.press_timer.is_armed())
            .unwrap_or(false)
    }
}

/// Flip `mobile_pressed` once, unless the touch that armed `generation` has
/// since ended or been replaced. Returns `true` if this call revealed it.
fn reveal<T: ListRow>(inner: &Weak<std::sync::RwLock<ListInner<T>>>, generation: u64) -> bool {
    let Some(inner) = inner.upgrade() else {
        return false;
    };
    let Ok(mut guard) = inner.write() else {
        return false;
    };
    if guard.mobile_pressed || guard.press_generation != generation {
        return false;
    }
    guard.mobile_pressed = true;
    guard.events.push_back(ListEvent::SelectionRevealed);
    true
}
