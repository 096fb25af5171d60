//! Order list example - a paged, selectable list of service orders.
//!
//! Simulates a host page: fetches a page of orders from a fake API, lets the
//! user long-press to reveal checkboxes, selects orders across pages and
//! moves through the paginator. Events are logged to `order-list.log`.

use std::fs::File;
use std::time::Duration;

use chrono::NaiveDate;
use content_list::prelude::*;
use log::LevelFilter;
use service_order::{PageResponse, ServiceOrder, ServiceOrderItem, ServiceOrderStatus};
use simplelog::{Config, WriteLogger};

const PAGE_SIZE: usize = 5;
const TOTAL_ORDERS: usize = 12;

// =============================================================================
// Simulated API
// =============================================================================

fn fake_order(id: u64) -> ServiceOrder {
    let statuses = [
        ServiceOrderStatus::Pending,
        ServiceOrderStatus::InProgress,
        ServiceOrderStatus::Finished,
        ServiceOrderStatus::Canceled,
    ];
    let items = (0..3)
        .map(|n| ServiceOrderItem {
            id: Some(id * 10 + n),
            service_order_id: Some(id),
            service_type_id: None,
            description: format!("Task {}", n + 1),
            status: Some(statuses[((id + n) % 4) as usize]),
            documents: Vec::new(),
        })
        .collect();

    let mut order = ServiceOrder {
        id: Some(id),
        client_id: id % 3 + 1,
        contract_id: None,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
            + chrono::Days::new(id),
        end_date: None,
        location: format!("Site {}", id),
        description: String::new(),
        status: ServiceOrderStatus::Pending,
        items,
    };
    order.refresh_status();
    order
}

/// Simulated API returning one page of orders.
async fn fetch_page(page: usize, size: usize) -> PageResponse<ServiceOrder> {
    tokio::time::sleep(Duration::from_millis(200)).await;
    let items = (page * size..(page + 1) * size)
        .filter(|&id| id < TOTAL_ORDERS)
        .map(|id| fake_order(id as u64 + 1))
        .collect();
    PageResponse {
        items,
        total: TOTAL_ORDERS,
        page,
        size,
    }
}

// =============================================================================
// Host page
// =============================================================================

fn columns() -> ColumnSet<ServiceOrder> {
    ColumnRegistry::new()
        .column(
            HeaderSpec::new("#").auto_width(false),
            CellSpec::new(|o: &ServiceOrder| o.id.map(|id| id.to_string()).unwrap_or_default()),
        )
        .column(
            HeaderSpec::new("Location"),
            CellSpec::new(|o: &ServiceOrder| o.location.clone()),
        )
        .column(
            HeaderSpec::new("Start").icon("pi pi-calendar"),
            CellSpec::new(|o: &ServiceOrder| o.start_date.to_string()).mobile_hidden(),
        )
        .column(
            HeaderSpec::new("Status"),
            CellSpec::new(|o: &ServiceOrder| o.status.label().to_string()),
        )
        .column(
            HeaderSpec::new("").auto_width(false),
            CellSpec::new(|o: &ServiceOrder| format!("[open {}]", ListRow::id(o))).action(),
        )
        .finalize()
}

async fn load(list: &ContentList<ServiceOrder>, page: usize, rows: usize) {
    list.set_loading(true);
    let response = fetch_page(page, rows).await;
    list.set_pagination(response.pagination(list.config().rows_per_page_options));
    list.set_rows(response.into_items());
    list.set_loading(false);
}

fn print_page(list: &ContentList<ServiceOrder>) {
    let pagination = list.pagination();
    println!(
        "-- page {}/{} --",
        pagination.current_page() + 1,
        pagination.page_count()
    );
    let headers: Vec<String> = list
        .visible_columns()
        .iter()
        .map(|c| c.header.label.clone())
        .collect();
    println!("    {}", headers.join(" | "));
    for index in 0..list.len() {
        let mark = if !list.show_mobile_check() {
            "   "
        } else if list.is_checked(index) {
            "[x]"
        } else {
            "[ ]"
        };
        let cells = list.render_row(index).unwrap_or_default();
        println!("{} {}", mark, cells.join(" | "));
    }
}

/// Apply the list's events the way a page component would.
fn handle_events(
    list: &ContentList<ServiceOrder>,
    selected: &mut Vec<ServiceOrder>,
) -> Option<PaginatorState> {
    let mut next_page = None;
    for event in list.drain_events() {
        match event {
            ListEvent::SelectionChange(checked) => {
                // Keep selections from other pages, replace this page's.
                let page_ids: Vec<String> = list.rows().iter().map(ListRow::id).collect();
                selected.retain(|o| !page_ids.contains(&ListRow::id(o)));
                selected.extend(checked);
                log::info!("{} orders selected", selected.len());
            }
            ListEvent::PageChange(state) => next_page = Some(state),
            ListEvent::SelectionRevealed => log::info!("Checkboxes revealed"),
        }
    }
    next_page
}

#[tokio::main]
async fn main() {
    let log_file = File::create("order-list.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = ListConfig::default()
        .selectable()
        .need_press()
        .mobile(true)
        .paginator()
        .empty_message("No service orders");
    let list = ContentList::new(config, columns())
        .with_can_select(|o: &ServiceOrder| !o.status.is_closed());
    let mut selected: Vec<ServiceOrder> = Vec::new();

    load(&list, 0, PAGE_SIZE).await;
    print_page(&list);

    // Long press on a row reveals the checkboxes.
    list.on_touch_start().expect("Failed to arm press timer");
    tokio::time::sleep(list.config().press_delay() + Duration::from_millis(50)).await;
    list.on_touch_end();
    handle_events(&list, &mut selected);

    list.toggle_select_all(true);
    handle_events(&list, &mut selected);
    print_page(&list);

    // Move to the next page; the host fetches and replaces the rows.
    let next = list.pagination().state_for_page(1);
    list.on_page_change(next);
    if let Some(state) = handle_events(&list, &mut selected) {
        load(&list, state.page, state.rows).await;
        list.set_selection_list(selected.clone());
    }
    if let Err(e) = list.select_item(0, true) {
        eprintln!("Error: {}", e);
    }
    handle_events(&list, &mut selected);
    print_page(&list);

    println!("selected: {:?}", selected.iter().map(ListRow::id).collect::<Vec<_>>());
}
