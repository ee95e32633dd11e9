//! 点单流程测试 - 从选桌到确认下单
//!
//! Drives the public API the way the waiter screen does: pick a table,
//! browse the menu, compose the cart, confirm, then read the dashboard.

use pos_front::catalog::{self, menu_tab};
use pos_front::{
    Config, DashboardSummary, OrderCart, SessionError, TableFilter, ToastQueue, UiSession,
    load_menu, seed,
};
use rust_decimal::Decimal;
use shared::error::CartError;
use shared::models::{MenuCategory, TableStatus};
use shared::order::{CartStatus, TableRef};
use std::io::Write;

#[test]
fn test_waiter_takes_two_orders() {
    let menu = seed::menu_items();
    let tables = seed::tables();
    let staff = seed::staff_members();
    let toasts = ToastQueue::new();
    let mut session = UiSession::new();

    // Table 1: two pizzas, reduce to one
    session.set_table_filter(TableFilter::Status(TableStatus::Free));
    let free = session.visible_tables(&tables);
    let first = free[0];
    assert_eq!(first.number, 1);

    let pizza = menu_tab(&menu, MenuCategory::Mains, "margherita")
        .next()
        .unwrap();
    let mut cart = session.open_order(first).unwrap();
    cart.add_item(pizza).unwrap();
    cart.add_item(pizza).unwrap();
    assert_eq!(cart.total(), Decimal::new(3000, 2));
    cart.set_quantity(5, 1).unwrap();
    let order = session.confirm_order(&toasts).unwrap();
    assert_eq!(order.total, Decimal::new(1500, 2));

    // Table 3: one of every drink
    let mut cart = session.open_order(&tables[2]).unwrap();
    for drink in catalog::by_category(&menu, MenuCategory::Drinks) {
        cart.add_item(drink).unwrap();
    }
    assert_eq!(cart.lines().len(), 4);
    let order = session.confirm_order(&toasts).unwrap();
    assert_eq!(order.total, Decimal::new(1850, 2));

    let messages: Vec<String> = toasts.drain().into_iter().map(|t| t.description).collect();
    assert_eq!(
        messages,
        vec![
            "Order for Table 1 has been sent to the kitchen.",
            "Order for Table 3 has been sent to the kitchen.",
        ]
    );

    let summary = DashboardSummary::compute(&tables, &staff, session.confirmed_orders());
    assert_eq!(summary.total_orders, 2);
    assert_eq!(summary.sales_total, Decimal::new(3350, 2));
    assert_eq!(summary.average_order_value, Decimal::new(1675, 2));
}

#[test]
fn test_billing_table_is_refused() {
    let tables = seed::tables();
    let mut session = UiSession::new();
    let billing = tables
        .iter()
        .find(|t| t.status == TableStatus::Billing)
        .unwrap();
    assert!(matches!(
        session.open_order(billing),
        Err(SessionError::TableNotOrderable(6))
    ));
}

#[test]
fn test_cart_lifecycle_errors() {
    let menu = seed::menu_items();
    let mut cart = OrderCart::open(TableRef { id: 4, number: 4 });

    assert_eq!(cart.confirm().unwrap_err(), CartError::EmptyOrder);
    assert_eq!(cart.set_quantity(1, 3).unwrap_err(), CartError::NotFound(1));

    cart.add_item(&menu[0]).unwrap();
    cart.confirm().unwrap();
    assert_eq!(cart.status(), CartStatus::Confirmed);
    assert!(matches!(
        cart.add_item(&menu[0]),
        Err(CartError::InvalidState {
            status: CartStatus::Confirmed
        })
    ));
}

#[test]
fn test_menu_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"[
            {"id": 21, "name": "Tiramisu Shake", "price": 6.25, "category": "Drinks", "image": "shake.png"},
            {"id": 22, "name": "Minestrone", "price": 7.4, "category": "Starters", "image": "soup.png"}
        ]"#,
    )
    .unwrap();

    let config = Config::with_overrides(Some(file.path().to_path_buf()), "$");
    let menu = load_menu(&config).unwrap();
    assert_eq!(menu.len(), 2);

    let mut cart = OrderCart::open(TableRef { id: 1, number: 1 });
    for item in &menu {
        cart.add_item(item).unwrap();
        cart.add_item(item).unwrap();
        cart.add_item(item).unwrap();
    }
    // 3 * 6.25 + 3 * 7.40
    assert_eq!(cart.total(), Decimal::new(4095, 2));
}

#[test]
fn test_builtin_menu_without_catalog_path() {
    let config = Config::with_overrides(None, "$");
    assert_eq!(load_menu(&config).unwrap().len(), 12);
}
