//! ContentList component - a generic list with column templating, selection
//! and pagination.
//!
//! The ContentList component provides:
//! - Columns declared as header/cell pairs (see [`crate::column`])
//! - Row selection keyed by [`ListRow::id`](crate::ListRow::id), with a
//!   derived "select all" flag
//! - Press-to-reveal checkboxes on touch layouts
//! - Paginator events relayed to the host
//!
//! # Example
//!
//! ```
//! use content_list::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Contract {
//!     id: u64,
//!     number: String,
//! }
//!
//! impl ListRow for Contract {
//!     fn id(&self) -> String { self.id.to_string() }
//! }
//!
//! let columns = ColumnRegistry::new()
//!     .column(HeaderSpec::new("Number"), CellSpec::new(|c: &Contract| c.number.clone()))
//!     .finalize();
//!
//! let list = ContentList::with_rows(
//!     ListConfig::default().selectable(),
//!     columns,
//!     vec![Contract { id: 1, number: "C-001".into() }],
//! );
//!
//! list.select_item(0, true).unwrap();
//! let events = list.drain_events();
//! assert_eq!(events.len(), 1);
//! assert!(list.select_all());
//! ```

mod events;
mod state;

pub use state::{CanSelectFn, ContentList, ListDisplay, ListId};
