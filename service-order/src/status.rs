//! Service order status and the rule deriving an order's status from its
//! items.

use serde::{Deserialize, Serialize};

/// Status of a service order or of one of its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceOrderStatus {
    Pending,
    InProgress,
    Finished,
    Canceled,
}

impl ServiceOrderStatus {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Finished => "Finished",
            Self::Canceled => "Canceled",
        }
    }

    /// Badge severity used when displaying the status.
    pub fn severity(self) -> Severity {
        match self {
            Self::Pending => Severity::Warn,
            Self::InProgress => Severity::Info,
            Self::Finished => Severity::Success,
            Self::Canceled => Severity::Danger,
        }
    }

    /// Whether no further work happens on an item in this status.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Finished | Self::Canceled)
    }
}

impl std::fmt::Display for ServiceOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Visual severity of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warn,
    Danger,
}

/// Derive an order's status from its items' statuses.
///
/// Items without a status are ignored. The checks run in this order and the
/// first match wins:
///
/// 1. no statuses: `Pending`
/// 2. all `Pending`: `Pending`
/// 3. any `InProgress`: `InProgress`
/// 4. all `Finished` or `Canceled`: `Finished`
/// 5. anything else (e.g. `Pending` mixed with `Finished`): `InProgress`
///
/// ```
/// use service_order::{aggregate_status, ServiceOrderStatus::*};
///
/// assert_eq!(aggregate_status([Some(Finished), Some(Canceled)]), Finished);
/// assert_eq!(aggregate_status([Some(Pending), Some(Finished)]), InProgress);
/// assert_eq!(aggregate_status([None, None]), Pending);
/// ```
pub fn aggregate_status<I>(statuses: I) -> ServiceOrderStatus
where
    I: IntoIterator<Item = Option<ServiceOrderStatus>>,
{
    use ServiceOrderStatus::*;

    let statuses: Vec<ServiceOrderStatus> = statuses.into_iter().flatten().collect();

    if statuses.is_empty() {
        return Pending;
    }
    if statuses.iter().all(|s| *s == Pending) {
        return Pending;
    }
    if statuses.contains(&InProgress) {
        return InProgress;
    }
    if statuses.iter().all(|s| s.is_closed()) {
        return Finished;
    }
    InProgress
}
