//! Content list state.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::column::{ColumnDescriptor, ColumnSet};
use crate::config::ListConfig;
use crate::events::ListEvent;
use crate::pagination::Pagination;
use crate::press::PressTimer;
use crate::row::ListRow;
use crate::selection::{SelectionEntry, SelectionState};

/// Decides whether a row may be checked.
pub type CanSelectFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Unique identifier for a ContentList instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(usize);

impl ListId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__content_list_{}", self.0)
    }
}

/// What the list body should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListDisplay {
    /// Rows are being fetched.
    Loading,
    /// No rows; carries the configured empty message, if any.
    Empty(Option<String>),
    /// Rows are available.
    Rows,
}

/// Internal state for the ContentList component.
pub(super) struct ListInner<T: ListRow> {
    /// Static inputs.
    pub config: ListConfig,
    /// Finalized columns.
    pub columns: ColumnSet<T>,
    /// Rows currently displayed.
    pub rows: Vec<T>,
    /// Host-owned selected subset, as last supplied.
    pub selection_list: Vec<T>,
    /// Per-row selection view.
    pub selection: SelectionState<T>,
    /// Row selectability predicate.
    pub can_select: CanSelectFn<T>,
    /// Host-owned pagination inputs.
    pub pagination: Pagination,
    /// Rows are being fetched by the host.
    pub is_loading: bool,
    /// Checkboxes revealed by a long press (sticky).
    pub mobile_pressed: bool,
    /// Pending long-press timer.
    pub press_timer: PressTimer,
    /// Bumped on every touch start and end; a firing timer only reveals if
    /// it still matches.
    pub press_generation: u64,
    /// Events waiting for the host.
    pub events: VecDeque<ListEvent<T>>,
}

impl<T: ListRow> ListInner<T> {
    fn new(config: ListConfig, columns: ColumnSet<T>) -> Self {
        let pagination = Pagination::default()
            .with_rows_per_page_options(config.rows_per_page_options.clone());
        Self {
            config,
            columns,
            rows: Vec::new(),
            selection_list: Vec::new(),
            selection: SelectionState::new(),
            can_select: Arc::new(|_| true),
            pagination,
            is_loading: false,
            mobile_pressed: false,
            press_timer: PressTimer::new(),
            press_generation: 0,
            events: VecDeque::new(),
        }
    }

    /// Rebuild the selection view from rows and the host selection.
    pub fn rebuild(&mut self) {
        let can_select = Arc::clone(&self.can_select);
        self.selection
            .rebuild(&self.rows, &self.selection_list, |row| can_select(row));
    }

    /// Queue a selection change with the current checked items.
    pub fn notify_selection_change(&mut self) {
        let checked = self.selection.checked_items();
        self.events.push_back(ListEvent::SelectionChange(checked));
    }

    /// Whether checkbox interaction is currently allowed.
    pub fn interactive(&self) -> bool {
        self.config.selectable && !self.config.disabled
    }
}

/// A generic list with column templating, row selection and pagination.
///
/// `ContentList<T>` owns:
/// - The displayed rows, replaced wholesale by the host after each fetch
/// - A per-row selection view derived from the host's selected subset
/// - Press-to-reveal checkbox mode for touch layouts
/// - A queue of [`ListEvent`]s the host drains after each interaction
///
/// Clones share the same state.
pub struct ContentList<T: ListRow> {
    /// Unique identifier.
    id: ListId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<ListInner<T>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<T: ListRow> Clone for ContentList<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: ListRow> std::fmt::Debug for ContentList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentList")
            .field("id", &self.id)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T: ListRow> ContentList<T> {
    /// Create an empty list.
    pub fn new(config: ListConfig, columns: ColumnSet<T>) -> Self {
        Self {
            id: ListId::new(),
            inner: Arc::new(RwLock::new(ListInner::new(config, columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a list with initial rows.
    pub fn with_rows(config: ListConfig, columns: ColumnSet<T>, rows: Vec<T>) -> Self {
        let list = Self::new(config, columns);
        list.set_rows(rows);
        list
    }

    /// Set the selectability predicate.
    pub fn with_can_select(self, can_select: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.set_can_select(can_select);
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the configuration.
    pub fn config(&self) -> ListConfig {
        self.inner
            .read()
            .map(|g| g.config.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the finalized columns.
    pub fn columns(&self) -> ColumnSet<T> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Columns shown for the configured viewport.
    pub fn visible_columns(&self) -> Vec<ColumnDescriptor<T>> {
        self.inner
            .read()
            .map(|g| {
                let visible: Vec<_> = g
                    .columns
                    .visible(g.config.is_mobile)
                    .into_iter()
                    .cloned()
                    .collect();
                visible
            })
            .unwrap_or_default()
    }

    /// Render the visible cells of a row.
    pub fn render_row(&self, index: usize) -> Option<Vec<String>> {
        self.inner.read().ok().and_then(|g| {
            let row = g.rows.get(index)?;
            let cells: Vec<String> = g
                .columns
                .visible(g.config.is_mobile)
                .into_iter()
                .map(|c| c.cell.render(row))
                .collect();
            Some(cells)
        })
    }

    /// Render the action cell of a row.
    pub fn render_action(&self, index: usize) -> Option<String> {
        self.inner.read().ok().and_then(|g| {
            let row = g.rows.get(index)?;
            g.columns.action_cell().map(|cell| cell.render(row))
        })
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Get all rows.
    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace the displayed rows and rebuild the selection view.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.rebuild();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Host-owned selected subset.
    pub fn selection_list(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selection_list.clone())
            .unwrap_or_default()
    }

    /// Replace the host-owned selected subset and rebuild the selection view.
    pub fn set_selection_list(&self, selected: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selection_list = selected;
            guard.rebuild();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Replace the selectability predicate.
    ///
    /// Checked rows stay checked; only the select-all flag is recomputed.
    pub fn set_can_select(&self, can_select: impl Fn(&T) -> bool + Send + Sync + 'static) {
        if let Ok(mut guard) = self.inner.write() {
            let inner = &mut *guard;
            inner.can_select = Arc::new(can_select);
            let can_select = Arc::clone(&inner.can_select);
            inner
                .selection
                .recompute(&inner.rows, |row| can_select(row));
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Whether the row at `index` may be checked.
    pub fn can_select(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|g| g.rows.get(index).is_some_and(|row| (g.can_select)(row)))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Loading and pagination
    // -------------------------------------------------------------------------

    /// Whether the host is fetching rows.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.is_loading).unwrap_or(false)
    }

    /// Mark the list as loading.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.is_loading != loading
        {
            guard.is_loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// What the list body should show.
    pub fn display(&self) -> ListDisplay {
        self.inner
            .read()
            .map(|g| {
                if g.is_loading {
                    ListDisplay::Loading
                } else if g.rows.is_empty() {
                    ListDisplay::Empty(g.config.empty_message.clone())
                } else {
                    ListDisplay::Rows
                }
            })
            .unwrap_or(ListDisplay::Empty(None))
    }

    /// Host-owned pagination inputs.
    pub fn pagination(&self) -> Pagination {
        self.inner
            .read()
            .map(|g| g.pagination.clone())
            .unwrap_or_default()
    }

    /// Update the pagination inputs.
    pub fn set_pagination(&self, pagination: Pagination) {
        if let Ok(mut guard) = self.inner.write() {
            guard.pagination = pagination;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Whether every selectable row is checked.
    pub fn select_all(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.select_all())
            .unwrap_or(false)
    }

    /// Whether the row at `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_checked(index))
            .unwrap_or(false)
    }

    /// Checked rows in row order.
    pub fn checked_items(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.selection.checked_items())
            .unwrap_or_default()
    }

    /// Selection entries aligned with the rows.
    pub fn selection_entries(&self) -> Vec<SelectionEntry<T>> {
        self.inner
            .read()
            .map(|g| g.selection.entries().to_vec())
            .unwrap_or_default()
    }

    /// Whether a long press has revealed the checkboxes.
    pub fn mobile_pressed(&self) -> bool {
        self.inner.read().map(|g| g.mobile_pressed).unwrap_or(false)
    }

    /// Whether checkboxes are shown.
    pub fn show_mobile_check(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.config.selectable && (!g.config.need_press || g.mobile_pressed))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Events and redraw
    // -------------------------------------------------------------------------

    /// Take every queued event, oldest first.
    pub fn drain_events(&self) -> Vec<ListEvent<T>> {
        self.inner
            .write()
            .map(|mut g| {
                let events: Vec<_> = g.events.drain(..).collect();
                events
            })
            .unwrap_or_default()
    }

    /// Check if the list needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
