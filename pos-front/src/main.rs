use pos_front::catalog;
use pos_front::dashboard::top_items;
use pos_front::floor::{self, badge_label};
use pos_front::order_money::format_currency;
use pos_front::{
    DashboardSummary, LogNotifier, NotificationSink, ToastQueue, UiSession, load_menu, seed,
    setup_environment,
};
use shared::models::MenuCategory;

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment()?;
    tracing::info!(environment = %config.environment, "POS front-of-house starting...");

    // 2. 加载菜单、桌台、员工
    let menu = load_menu(&config)?;
    let tables = seed::tables();
    let staff = seed::staff_members();

    for table in &tables {
        tracing::debug!(table = table.number, badge = %badge_label(table), "Table");
    }

    // 3. 演示点单流程
    let mut session = UiSession::new();
    let toasts = ToastQueue::new();

    let table = tables
        .iter()
        .find(|t| floor::is_orderable(t))
        .ok_or_else(|| anyhow::anyhow!("no table can take an order"))?;

    let mut cart = session.open_order(table)?;
    for category in MenuCategory::ALL {
        if let Some(item) = catalog::by_category(&menu, category).next() {
            cart.add_item(item)?;
        }
    }
    if let Some(first) = cart.lines().first().map(|l| l.id) {
        cart.set_quantity(first, 2)?;
    }
    tracing::info!(
        table = table.number,
        total = %format_currency(cart.total(), &config.currency_symbol),
        "Order composed"
    );

    let order = session.confirm_order(&toasts)?;
    LogNotifier.order_confirmed(&order);
    for toast in toasts.drain() {
        println!("{}: {}", toast.title, toast.description);
    }

    // 4. 经理看板
    let summary = DashboardSummary::compute(&tables, &staff, session.confirmed_orders());
    println!(
        "Active tables: {} | Staff on duty: {} | Orders: {} | Sales: {}",
        summary.active_tables,
        summary.staff_on_duty,
        summary.total_orders,
        format_currency(summary.sales_total, &config.currency_symbol)
    );
    for item in top_items(session.confirmed_orders(), 3) {
        println!("  {} x{}", item.name, item.quantity);
    }

    Ok(())
}
