//! Error types for content lists.

use thiserror::Error;

/// Errors raised by list interactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A toggle referenced a row that is not displayed.
    #[error("Row {index} out of range (list has {len} rows)")]
    RowOutOfRange {
        /// Requested row index.
        index: usize,
        /// Number of displayed rows.
        len: usize,
    },

    /// The press timer needs a tokio runtime to run on.
    #[error("Press timer requires a tokio runtime")]
    NoRuntime,
}

/// Errors raised when validating or loading a [`ListConfig`].
///
/// [`ListConfig`]: crate::ListConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rows_per_page_options must not be empty")]
    NoPageSizes,

    #[error("rows_per_page_options contains a zero page size")]
    ZeroPageSize,

    #[error("press_delay_ms must be greater than zero")]
    ZeroPressDelay,

    #[error("invalid list config: {0}")]
    Parse(#[from] serde_json::Error),
}
