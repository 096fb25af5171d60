use content_list::prelude::*;
use content_list::{ListError, ListEventKind};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    location: String,
    closed: bool,
}

impl ListRow for Order {
    fn id(&self) -> String {
        format!("order-{}", self.id)
    }
}

fn order(id: u32) -> Order {
    Order {
        id,
        location: format!("Site {}", id),
        closed: false,
    }
}

fn orders(n: u32) -> Vec<Order> {
    (0..n).map(order).collect()
}

fn columns() -> ColumnSet<Order> {
    ColumnRegistry::new()
        .column(HeaderSpec::new("#"), CellSpec::new(|o: &Order| o.id.to_string()))
        .column(
            HeaderSpec::new("Location"),
            CellSpec::new(|o: &Order| o.location.clone()).mobile_hidden(),
        )
        .column(
            HeaderSpec::new("").auto_width(false),
            CellSpec::new(|o: &Order| format!("edit {}", o.id)).action(),
        )
        .finalize()
}

fn selectable_list(rows: Vec<Order>) -> ContentList<Order> {
    ContentList::with_rows(ListConfig::default().selectable(), columns(), rows)
}

fn last_selection(list: &ContentList<Order>) -> Option<Vec<Order>> {
    list.drain_events().into_iter().rev().find_map(|e| match e {
        ListEvent::SelectionChange(items) => Some(items),
        _ => None,
    })
}

// ============================================================================
// Rebuild
// ============================================================================

#[test]
fn test_rebuild_checks_rows_in_selection_list() {
    let list = selectable_list(orders(5));
    list.set_selection_list(vec![order(1), order(3), order(42)]);

    let entries = list.selection_entries();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries.iter().filter(|e| e.checked).count(), 2);
    assert_eq!(entries[1].item, Some(order(1)));
    assert_eq!(entries[2].item, None);
    assert!(!list.select_all());
}

#[test]
fn test_rebuild_matches_by_id_not_by_value() {
    let list = selectable_list(orders(2));
    let mut stale = order(1);
    stale.location = "Renamed".to_string();
    list.set_selection_list(vec![stale]);

    assert!(list.is_checked(1));
    // The entry carries the displayed row, not the stale copy.
    assert_eq!(list.checked_items(), vec![order(1)]);
}

#[test]
fn test_replacing_rows_resets_selection_view() {
    let list = selectable_list(orders(3));
    list.set_selection_list(vec![order(0)]);
    assert!(list.is_checked(0));

    list.set_rows((10..13).map(order).collect());
    assert_eq!(list.checked_items(), Vec::<Order>::new());

    // Returning to the first page restores the host selection.
    list.set_rows(orders(3));
    assert!(list.is_checked(0));
}

#[test]
fn test_select_all_after_rebuild() {
    let list = selectable_list(orders(2));
    list.set_selection_list(orders(2));
    assert!(list.select_all());

    let empty = selectable_list(vec![]);
    empty.set_selection_list(orders(2));
    assert!(!empty.select_all());
}

// ============================================================================
// Toggling
// ============================================================================

#[test]
fn test_select_item_emits_checked_items_in_row_order() {
    let list = selectable_list(orders(4));
    list.select_item(3, true).unwrap();
    list.select_item(1, true).unwrap();

    let events = list.drain_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.kind() == ListEventKind::SelectionChange));
    assert_eq!(
        events[1],
        ListEvent::SelectionChange(vec![order(1), order(3)])
    );
}

#[test]
fn test_select_item_round_trip() {
    let list = selectable_list(orders(3));
    list.set_selection_list(vec![order(2)]);
    let before = list.checked_items();

    list.select_item(0, true).unwrap();
    list.select_item(0, false).unwrap();

    assert_eq!(list.checked_items(), before);
    assert_eq!(last_selection(&list), Some(before));
}

#[test]
fn test_select_item_out_of_range() {
    let list = selectable_list(orders(2));
    assert_eq!(
        list.select_item(2, true),
        Err(ListError::RowOutOfRange { index: 2, len: 2 })
    );
    assert!(list.drain_events().is_empty());
}

#[test]
fn test_select_all_tracks_individual_toggles() {
    let list = selectable_list(orders(2));
    list.select_item(0, true).unwrap();
    assert!(!list.select_all());
    list.select_item(1, true).unwrap();
    assert!(list.select_all());
    list.select_item(0, false).unwrap();
    assert!(!list.select_all());
}

#[test]
fn test_toggle_select_all_is_idempotent() {
    let list = selectable_list(orders(3));
    assert_eq!(list.toggle_select_all(true), EventResult::Consumed);
    let once = list.checked_items();
    list.toggle_select_all(true);

    assert_eq!(list.checked_items(), once);
    assert_eq!(once, orders(3));
    assert!(list.select_all());

    list.toggle_select_all(false);
    assert!(list.checked_items().is_empty());
    assert!(!list.select_all());
}

#[test]
fn test_toggle_select_all_leaves_unselectable_rows_alone() {
    let mut rows = orders(4);
    rows[1].closed = true;
    rows[2].closed = true;
    let list = selectable_list(rows.clone()).with_can_select(|o: &Order| !o.closed);
    // A closed row that the host already had selected stays checked.
    list.set_selection_list(vec![rows[2].clone()]);

    list.toggle_select_all(true);
    assert_eq!(
        list.checked_items(),
        vec![rows[0].clone(), rows[2].clone(), rows[3].clone()]
    );
    assert!(list.select_all());

    list.toggle_select_all(false);
    assert_eq!(list.checked_items(), vec![rows[2].clone()]);
    assert!(!list.select_all());
}

#[test]
fn test_changing_can_select_keeps_checked_rows() {
    let rows = orders(3);
    let list = selectable_list(rows.clone());
    list.select_item(0, true).unwrap();
    list.select_item(1, true).unwrap();
    assert!(!list.select_all());

    // Row 2 becomes unselectable; the unpushed toggles survive.
    list.set_can_select(|o: &Order| o.id != 2);
    assert_eq!(list.checked_items(), vec![rows[0].clone(), rows[1].clone()]);
    assert!(list.select_all());

    list.set_can_select(|_| true);
    assert_eq!(list.checked_items().len(), 2);
    assert!(!list.select_all());
}

#[test]
fn test_unselectable_row_toggle_is_ignored() {
    let list = selectable_list(orders(2)).with_can_select(|o: &Order| o.id != 0);
    assert!(!list.can_select(0));
    assert_eq!(list.select_item(0, true), Ok(EventResult::Ignored));
    assert!(!list.is_checked(0));
    assert!(list.drain_events().is_empty());
}

#[test]
fn test_disabled_or_non_selectable_list_ignores_toggles() {
    let disabled = ContentList::with_rows(
        ListConfig::default().selectable().disabled(true),
        columns(),
        orders(2),
    );
    assert_eq!(disabled.toggle_select_all(true), EventResult::Ignored);
    assert_eq!(disabled.select_item(0, true), Ok(EventResult::Ignored));

    let plain = ContentList::with_rows(ListConfig::default(), columns(), orders(2));
    assert_eq!(plain.toggle_select_all(true), EventResult::Ignored);
    assert!(plain.checked_items().is_empty());
}

// ============================================================================
// Pagination relay
// ============================================================================

#[test]
fn test_page_change_is_relayed_without_touching_rows() {
    let list = selectable_list(orders(3));
    list.set_pagination(Pagination::new(0, 3).with_total_records(9));
    list.select_item(0, true).unwrap();
    list.drain_events();

    let next = list.pagination().state_for_page(1);
    assert!(list.on_page_change(next).is_handled());

    assert_eq!(list.drain_events(), vec![ListEvent::PageChange(next)]);
    assert_eq!(list.rows(), orders(3));
    assert!(list.is_checked(0));
    assert_eq!(list.pagination().first, 0);
}

#[test]
fn test_pagination_defaults_from_config() {
    let list = ContentList::<Order>::new(
        ListConfig::default().rows_per_page_options(vec![5, 50]),
        columns(),
    );
    assert_eq!(list.pagination().rows_per_page_options, vec![5, 50]);
}

// ============================================================================
// Display and rendering
// ============================================================================

#[test]
fn test_display_states() {
    let list = ContentList::new(
        ListConfig::default().empty_message("No service orders"),
        columns(),
    );
    assert_eq!(
        list.display(),
        ListDisplay::Empty(Some("No service orders".to_string()))
    );

    list.set_loading(true);
    assert_eq!(list.display(), ListDisplay::Loading);

    list.set_rows(orders(1));
    list.set_loading(false);
    assert_eq!(list.display(), ListDisplay::Rows);
}

#[test]
fn test_render_row_respects_viewport() {
    let desktop = ContentList::with_rows(ListConfig::default(), columns(), orders(2));
    assert_eq!(
        desktop.render_row(1),
        Some(vec!["1".to_string(), "Site 1".to_string(), "edit 1".to_string()])
    );

    let mobile = ContentList::with_rows(ListConfig::default().mobile(true), columns(), orders(2));
    assert_eq!(mobile.visible_columns().len(), 2);
    assert_eq!(
        mobile.render_row(1),
        Some(vec!["1".to_string(), "edit 1".to_string()])
    );
    assert_eq!(mobile.render_action(0), Some("edit 0".to_string()));
    assert_eq!(mobile.render_row(5), None);
}

#[test]
fn test_dirty_flag() {
    let list = selectable_list(orders(1));
    assert!(list.is_dirty());
    list.clear_dirty();

    list.on_page_change(PaginatorState::default());
    assert!(!list.is_dirty());

    list.select_item(0, true).unwrap();
    assert!(list.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let list = selectable_list(orders(2));
    let handle = list.clone();
    handle.select_item(1, true).unwrap();
    assert!(list.is_checked(1));
    assert_eq!(list.id(), handle.id());
}

#[test]
fn test_checkboxes_visible_without_press_requirement() {
    let list = selectable_list(orders(1));
    assert!(list.show_mobile_check());

    let hidden = ContentList::with_rows(ListConfig::default(), columns(), orders(1));
    assert!(!hidden.show_mobile_check());
}
