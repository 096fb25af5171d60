//! Tests for the order status rule.

use service_order::ServiceOrderStatus::{Canceled, Finished, InProgress, Pending};
use service_order::{ServiceOrderStatus, Severity, aggregate_status};

fn derive(statuses: &[ServiceOrderStatus]) -> ServiceOrderStatus {
    aggregate_status(statuses.iter().copied().map(Some))
}

#[test]
fn test_no_items_is_pending() {
    assert_eq!(derive(&[]), Pending);
}

#[test]
fn test_null_statuses_are_ignored() {
    assert_eq!(aggregate_status([None, None]), Pending);
    assert_eq!(aggregate_status([None, Some(Finished)]), Finished);
    assert_eq!(aggregate_status([Some(Pending), None]), Pending);
}

#[test]
fn test_all_pending_is_pending() {
    assert_eq!(derive(&[Pending, Pending]), Pending);
}

#[test]
fn test_any_in_progress_wins() {
    assert_eq!(derive(&[Pending, InProgress]), InProgress);
    assert_eq!(derive(&[Finished, InProgress, Canceled]), InProgress);
}

#[test]
fn test_finished_or_canceled_is_finished() {
    assert_eq!(derive(&[Finished, Canceled]), Finished);
    assert_eq!(derive(&[Canceled, Canceled]), Finished);
    assert_eq!(derive(&[Finished]), Finished);
}

#[test]
fn test_mixed_pending_and_closed_falls_back_to_in_progress() {
    assert_eq!(derive(&[Pending, Finished]), InProgress);
    assert_eq!(derive(&[Canceled, Pending]), InProgress);
}

#[test]
fn test_status_wire_names() {
    assert_eq!(
        serde_json::to_string(&InProgress).unwrap(),
        "\"IN_PROGRESS\""
    );
    let parsed: ServiceOrderStatus = serde_json::from_str("\"CANCELED\"").unwrap();
    assert_eq!(parsed, Canceled);
}

#[test]
fn test_labels_and_severity() {
    assert_eq!(InProgress.to_string(), "In progress");
    assert_eq!(Pending.severity(), Severity::Warn);
    assert_eq!(Finished.severity(), Severity::Success);
    assert_eq!(Canceled.severity(), Severity::Danger);
    assert!(Canceled.is_closed());
    assert!(!Pending.is_closed());
}
