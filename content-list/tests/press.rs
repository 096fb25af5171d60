use std::time::Duration;

use content_list::prelude::*;
use content_list::{ListError, PressTimer};

#[derive(Debug, Clone, PartialEq)]
struct Item(u32);

impl ListRow for Item {
    fn id(&self) -> String {
        self.0.to_string()
    }
}

fn press_list() -> ContentList<Item> {
    ContentList::with_rows(
        ListConfig::default().selectable().need_press().mobile(true),
        ColumnRegistry::new()
            .column(HeaderSpec::new("Item"), CellSpec::new(|i: &Item| i.0.to_string()))
            .finalize(),
        vec![Item(1), Item(2)],
    )
}

/// Let spawned timer tasks observe the advanced clock.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

fn revealed_count(list: &ContentList<Item>) -> usize {
    list.drain_events()
        .into_iter()
        .filter(|e| *e == ListEvent::SelectionRevealed)
        .count()
}

#[tokio::test(start_paused = true)]
async fn test_short_touch_does_not_reveal() {
    let list = press_list();
    assert!(!list.show_mobile_check());

    assert_eq!(list.on_touch_start(), Ok(EventResult::Consumed));
    tokio::time::advance(Duration::from_millis(500)).await;
    settle().await;
    assert_eq!(list.on_touch_end(), EventResult::Consumed);

    tokio::time::advance(Duration::from_millis(2000)).await;
    settle().await;

    assert!(!list.mobile_pressed());
    assert!(!list.show_mobile_check());
    assert_eq!(revealed_count(&list), 0);
}

#[tokio::test(start_paused = true)]
async fn test_long_press_reveals_exactly_once() {
    let list = press_list();
    list.on_touch_start().unwrap();
    assert!(list.is_press_pending());

    tokio::time::advance(Duration::from_millis(1000)).await;
    settle().await;

    assert!(list.mobile_pressed());
    assert!(list.show_mobile_check());
    assert!(!list.is_press_pending());

    // Sticky: further touches do nothing.
    assert_eq!(list.on_touch_start(), Ok(EventResult::Ignored));
    assert_eq!(list.on_touch_end(), EventResult::Ignored);
    tokio::time::advance(Duration::from_millis(5000)).await;
    settle().await;

    assert!(list.mobile_pressed());
    assert_eq!(revealed_count(&list), 1);
}

#[tokio::test(start_paused = true)]
async fn test_restarted_touch_keeps_a_single_timer() {
    let list = press_list();
    list.on_touch_start().unwrap();
    tokio::time::advance(Duration::from_millis(600)).await;
    settle().await;

    // Second touch replaces the first timer and restarts the delay.
    list.on_touch_start().unwrap();
    tokio::time::advance(Duration::from_millis(600)).await;
    settle().await;
    assert!(!list.mobile_pressed());

    tokio::time::advance(Duration::from_millis(400)).await;
    settle().await;
    assert!(list.mobile_pressed());
    assert_eq!(revealed_count(&list), 1);
}

#[tokio::test(start_paused = true)]
async fn test_custom_press_delay() {
    let list = ContentList::with_rows(
        ListConfig::default()
            .selectable()
            .need_press()
            .with_press_delay(Duration::from_millis(250)),
        ColumnSet::default(),
        vec![Item(1)],
    );
    list.on_touch_start().unwrap();
    tokio::time::advance(Duration::from_millis(250)).await;
    settle().await;
    assert!(list.mobile_pressed());
}

#[tokio::test(start_paused = true)]
async fn test_touch_ignored_without_need_press() {
    let list = ContentList::with_rows(
        ListConfig::default().selectable(),
        ColumnSet::default(),
        vec![Item(1)],
    );
    assert_eq!(list.on_touch_start(), Ok(EventResult::Ignored));
    assert_eq!(list.on_touch_end(), EventResult::Ignored);
    assert!(list.show_mobile_check());
}

#[test]
fn test_touch_start_outside_runtime() {
    let list = press_list();
    assert_eq!(list.on_touch_start(), Err(ListError::NoRuntime));
    assert!(!list.mobile_pressed());
}

#[tokio::test(start_paused = true)]
async fn test_timer_cancel_is_idempotent() {
    let mut timer = PressTimer::new();
    assert!(!timer.cancel());

    timer.arm(Duration::from_millis(10), || {}).unwrap();
    assert!(timer.is_armed());
    assert!(timer.cancel());
    assert!(!timer.cancel());

    timer.arm(Duration::from_millis(10), || {}).unwrap();
    tokio::time::advance(Duration::from_millis(10)).await;
    settle().await;
    assert!(!timer.is_armed());
    assert!(!timer.cancel());
}
