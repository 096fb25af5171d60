//! Content list configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::pagination::DEFAULT_ROWS_PER_PAGE_OPTIONS;

/// Default long-press duration before checkboxes are revealed.
pub const DEFAULT_PRESS_DELAY: Duration = Duration::from_millis(1000);

/// Static inputs of a content list.
///
/// Values not set by the host fall back to the defaults below, including when
/// the config is loaded from JSON with missing fields.
///
/// # Example
///
/// ```
/// use content_list::ListConfig;
///
/// let config = ListConfig::default()
///     .selectable()
///     .need_press()
///     .mobile(true);
/// assert!(config.validate().is_ok());
///
/// let loaded = ListConfig::from_json(r#"{ "selectable": true, "paginator": true }"#).unwrap();
/// assert_eq!(loaded.rows_per_page_options, vec![10, 20, 30]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Render for a narrow (touch) viewport.
    pub is_mobile: bool,

    /// Show the paginator below the rows.
    pub paginator: bool,

    /// Rows can be checked.
    pub selectable: bool,

    /// On mobile, checkboxes stay hidden until a row is long-pressed.
    pub need_press: bool,

    /// All interaction is disabled.
    pub disabled: bool,

    /// Long-press duration in milliseconds.
    ///
    /// Default: 1000
    pub press_delay_ms: u64,

    /// Page sizes offered by the paginator.
    ///
    /// Default: `[10, 20, 30]`
    pub rows_per_page_options: Vec<usize>,

    /// Layout class of the row grid.
    ///
    /// Default: `"flex"`
    pub grid_class: String,

    /// Message shown when there are no rows.
    pub empty_message: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            is_mobile: false,
            paginator: false,
            selectable: false,
            need_press: false,
            disabled: false,
            press_delay_ms: DEFAULT_PRESS_DELAY.as_millis() as u64,
            rows_per_page_options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
            grid_class: "flex".to_string(),
            empty_message: None,
        }
    }
}

impl ListConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config for values the list cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_page_options.is_empty() {
            return Err(ConfigError::NoPageSizes);
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.press_delay_ms == 0 {
            return Err(ConfigError::ZeroPressDelay);
        }
        Ok(())
    }

    /// Long-press duration.
    pub fn press_delay(&self) -> Duration {
        Duration::from_millis(self.press_delay_ms)
    }

    /// Render for a narrow viewport.
    pub fn mobile(mut self, is_mobile: bool) -> Self {
        self.is_mobile = is_mobile;
        self
    }

    /// Show the paginator.
    pub fn paginator(mut self) -> Self {
        self.paginator = true;
        self
    }

    /// Make rows checkable.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Require a long press before showing checkboxes.
    pub fn need_press(mut self) -> Self {
        self.need_press = true;
        self
    }

    /// Disable all interaction.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the long-press duration.
    pub fn with_press_delay(mut self, delay: Duration) -> Self {
        self.press_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the page size choices.
    pub fn rows_per_page_options(mut self, options: Vec<usize>) -> Self {
        self.rows_per_page_options = options;
        self
    }

    /// Set the grid class.
    pub fn grid_class(mut self, class: impl Into<String>) -> Self {
        self.grid_class = class.into();
        self
    }

    /// Set the empty-list message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }
}
