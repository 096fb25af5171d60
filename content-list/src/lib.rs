//! Generic list component state: rows, column templates, selection and
//! pagination, independent of any rendering backend.

pub mod column;
pub mod config;
pub mod error;
pub mod events;
pub mod list;
pub mod pagination;
pub mod press;
pub mod row;
pub mod selection;

pub use column::{
    CellHandle, CellRenderer, CellSpec, ColumnDescriptor, ColumnRegistry, ColumnSet, HeaderHandle,
    HeaderSpec, finalize_columns,
};
pub use config::{DEFAULT_PRESS_DELAY, ListConfig};
pub use error::{ConfigError, ListError};
pub use events::{EventResult, ListEvent, ListEventKind};
pub use list::{CanSelectFn, ContentList, ListDisplay, ListId};
pub use pagination::{DEFAULT_ROWS_PER_PAGE_OPTIONS, Pagination, PaginatorState};
pub use press::PressTimer;
pub use row::ListRow;
pub use selection::{SelectionEntry, SelectionState};

pub mod prelude {
    pub use crate::column::{CellSpec, ColumnRegistry, ColumnSet, HeaderSpec};
    pub use crate::config::ListConfig;
    pub use crate::events::{EventResult, ListEvent};
    pub use crate::list::{ContentList, ListDisplay};
    pub use crate::pagination::{Pagination, PaginatorState};
    pub use crate::row::ListRow;
}
