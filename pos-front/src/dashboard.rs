//! Manager dashboard summary

use crate::order_money;
use crate::{floor, roster};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, StaffMember, TableStatus};
use shared::order::ConfirmedOrder;
use std::collections::BTreeMap;

/// Headline figures for the manager dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Tables that are not free
    pub active_tables: usize,
    pub staff_on_duty: usize,
    pub total_orders: usize,
    pub sales_total: Decimal,
    /// Zero when there are no orders
    pub average_order_value: Decimal,
}

impl DashboardSummary {
    pub fn compute(
        tables: &[DiningTable],
        staff: &[StaffMember],
        orders: &[ConfirmedOrder],
    ) -> Self {
        let active_tables = floor::status_counts(tables)
            .iter()
            .filter(|(status, _)| **status != TableStatus::Free)
            .map(|(_, count)| count)
            .sum();
        let sales_total = order_money::round_money(orders.iter().map(|o| o.total).sum());

        Self {
            active_tables,
            staff_on_duty: roster::on_duty_count(staff),
            total_orders: orders.len(),
            sales_total,
            average_order_value: order_money::average(sales_total, orders.len()),
        }
    }
}

/// Units sold of one menu item across confirmed orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub revenue: Decimal,
}

/// Best-selling items by units sold, at most `limit` entries
///
/// Ties are broken by item id. The name is the one recorded in the first
/// order containing the item.
pub fn top_items(orders: &[ConfirmedOrder], limit: usize) -> Vec<TopItem> {
    let mut by_id: BTreeMap<i64, TopItem> = BTreeMap::new();

    for line in orders.iter().flat_map(|o| &o.lines) {
        let entry = by_id.entry(line.id).or_insert_with(|| TopItem {
            id: line.id,
            name: line.name.clone(),
            quantity: 0,
            revenue: Decimal::ZERO,
        });
        entry.quantity += i64::from(line.quantity);
        entry.revenue += order_money::line_total(line);
    }

    let mut items: Vec<TopItem> = by_id
        .into_values()
        .map(|mut item| {
            item.revenue = order_money::round_money(item.revenue);
            item
        })
        .collect();
    items.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    items.truncate(limit);
    items
}
