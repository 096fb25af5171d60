//! Column registration: header/cell pairs declared by the host.
//!
//! A host declares a table by registering headers and cells in order. The
//! Nth header belongs to the Nth cell; anything without a partner at the same
//! index is dropped when the columns are finalized.
//!
//! ```
//! use content_list::{CellSpec, ColumnRegistry, HeaderSpec, ListRow};
//!
//! #[derive(Clone)]
//! struct User { id: u64, name: String }
//!
//! impl ListRow for User {
//!     fn id(&self) -> String { self.id.to_string() }
//! }
//!
//! let mut registry = ColumnRegistry::new();
//! registry.register_header(HeaderSpec::new("Name"));
//! registry.register_cell(CellSpec::new(|u: &User| u.name.clone()));
//! registry.register_header(HeaderSpec::new("").auto_width(false));
//! registry.register_cell(CellSpec::new(|_: &User| "edit".to_string()).action());
//!
//! let columns = registry.finalize();
//! assert_eq!(columns.len(), 2);
//! assert!(columns.action_cell().is_some());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::row::ListRow;

/// Header part of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSpec {
    /// Header text.
    pub label: String,
    /// Inline style applied to the header cell.
    pub style: String,
    /// Optional icon shown next to the label.
    pub icon: Option<String>,
    /// Whether the header takes an automatic share of the row width.
    pub auto_width: bool,
    /// Extra classes declared by the host.
    pub classes: Vec<String>,
}

impl HeaderSpec {
    /// Create a header with the given label and default flags.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: String::new(),
            icon: None,
            auto_width: true,
            classes: Vec::new(),
        }
    }

    /// Set the inline style.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the header icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Enable or disable automatic width.
    pub fn auto_width(mut self, auto_width: bool) -> Self {
        self.auto_width = auto_width;
        self
    }

    /// Add an extra class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Classes to put on the rendered header element.
    pub fn css_classes(&self) -> String {
        let mut classes = Vec::with_capacity(self.classes.len() + 1);
        if self.auto_width {
            classes.push("col");
        }
        classes.extend(self.classes.iter().map(String::as_str));
        classes.join(" ")
    }
}

/// Renders one cell of a row as text.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Cell part of a column.
pub struct CellSpec<T: ListRow> {
    renderer: CellRenderer<T>,
    /// Hidden on narrow viewports (ignored for the action column).
    pub mobile_hidden: bool,
    /// Marks the row-action column.
    pub is_action: bool,
    /// Whether the cell takes an automatic share of the row width.
    pub auto_width: bool,
    /// Whether overflowing content is truncated with an ellipsis.
    pub ellipsis: bool,
}

impl<T: ListRow> CellSpec<T> {
    /// Create a cell from a renderer.
    pub fn new(renderer: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        Self {
            renderer: Arc::new(renderer),
            mobile_hidden: false,
            is_action: false,
            auto_width: true,
            ellipsis: true,
        }
    }

    /// Hide this column on mobile.
    pub fn mobile_hidden(mut self) -> Self {
        self.mobile_hidden = true;
        self
    }

    /// Mark this column as the row-action column.
    pub fn action(mut self) -> Self {
        self.is_action = true;
        self
    }

    /// Enable or disable automatic width.
    pub fn auto_width(mut self, auto_width: bool) -> Self {
        self.auto_width = auto_width;
        self
    }

    /// Enable or disable ellipsis truncation.
    pub fn ellipsis(mut self, ellipsis: bool) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    /// Render this cell for a row.
    pub fn render(&self, row: &T) -> String {
        (self.renderer)(row)
    }

    /// Whether this column is shown on narrow viewports.
    ///
    /// The action column is always shown.
    pub fn shown_on_mobile(&self) -> bool {
        self.is_action || !self.mobile_hidden
    }

    /// Classes to put on the rendered cell element.
    pub fn css_classes(&self) -> String {
        let mut classes = vec!["pf-cell"];
        if self.auto_width {
            classes.push("col");
        }
        if self.ellipsis {
            classes.push("cell-ellipsis");
        }
        classes.join(" ")
    }
}

impl<T: ListRow> Clone for CellSpec<T> {
    fn clone(&self) -> Self {
        Self {
            renderer: Arc::clone(&self.renderer),
            mobile_hidden: self.mobile_hidden,
            is_action: self.is_action,
            auto_width: self.auto_width,
            ellipsis: self.ellipsis,
        }
    }
}

impl<T: ListRow> fmt::Debug for CellSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellSpec")
            .field("mobile_hidden", &self.mobile_hidden)
            .field("is_action", &self.is_action)
            .field("auto_width", &self.auto_width)
            .field("ellipsis", &self.ellipsis)
            .finish_non_exhaustive()
    }
}

/// One logical column: a header and the cell that renders under it.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor<T: ListRow> {
    pub header: HeaderSpec,
    pub cell: CellSpec<T>,
}

impl<T: ListRow> ColumnDescriptor<T> {
    /// Whether this column is shown on narrow viewports.
    pub fn shown_on_mobile(&self) -> bool {
        self.cell.shown_on_mobile()
    }
}

/// Position of a registered header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderHandle(usize);

impl HeaderHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position of a registered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandle(usize);

impl CellHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Collects headers and cells in declaration order.
#[derive(Debug)]
pub struct ColumnRegistry<T: ListRow> {
    headers: Vec<HeaderSpec>,
    cells: Vec<CellSpec<T>>,
}

impl<T: ListRow> Default for ColumnRegistry<T> {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            cells: Vec::new(),
        }
    }
}

impl<T: ListRow> ColumnRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next header.
    pub fn register_header(&mut self, spec: HeaderSpec) -> HeaderHandle {
        self.headers.push(spec);
        HeaderHandle(self.headers.len() - 1)
    }

    /// Register the next cell.
    pub fn register_cell(&mut self, spec: CellSpec<T>) -> CellHandle {
        self.cells.push(spec);
        CellHandle(self.cells.len() - 1)
    }

    /// Register a header and its cell together.
    pub fn column(mut self, header: HeaderSpec, cell: CellSpec<T>) -> Self {
        self.register_header(header);
        self.register_cell(cell);
        self
    }

    /// Pair everything registered so far.
    pub fn finalize(self) -> ColumnSet<T> {
        finalize_columns(self.headers, self.cells)
    }
}

/// Pair headers and cells by index.
///
/// Unmatched entries on either side are dropped. A cell marked as action is
/// recorded as the action column even when it has no header; if several are
/// marked, the last one wins.
pub fn finalize_columns<T: ListRow>(
    headers: Vec<HeaderSpec>,
    cells: Vec<CellSpec<T>>,
) -> ColumnSet<T> {
    let header_count = headers.len();
    let cell_count = cells.len();
    let mut action: Option<CellSpec<T>> = None;
    let mut action_marks = 0usize;

    for cell in cells.iter().filter(|c| c.is_action) {
        action_marks += 1;
        action = Some(cell.clone());
    }

    if action_marks > 1 {
        log::warn!(
            "{} cells marked as action column, keeping the last one",
            action_marks
        );
    }

    let columns: Vec<_> = headers
        .into_iter()
        .zip(cells)
        .map(|(header, cell)| ColumnDescriptor { header, cell })
        .collect();

    if header_count != cell_count {
        log::debug!(
            "Column pairing dropped {} unmatched entries ({} headers, {} cells)",
            header_count.abs_diff(cell_count),
            header_count,
            cell_count
        );
    }

    ColumnSet { columns, action }
}

/// Finalized, immutable set of columns.
#[derive(Debug, Clone)]
pub struct ColumnSet<T: ListRow> {
    columns: Vec<ColumnDescriptor<T>>,
    action: Option<CellSpec<T>>,
}

impl<T: ListRow> Default for ColumnSet<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            action: None,
        }
    }
}

impl<T: ListRow> ColumnSet<T> {
    /// Number of paired columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All paired columns in declaration order.
    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    /// The action cell, if one was registered.
    pub fn action_cell(&self) -> Option<&CellSpec<T>> {
        self.action.as_ref()
    }

    /// Columns shown for the given viewport.
    pub fn visible(&self, is_mobile: bool) -> Vec<&ColumnDescriptor<T>> {
        self.columns
            .iter()
            .filter(|c| !is_mobile || c.shown_on_mobile())
            .collect()
    }
}
