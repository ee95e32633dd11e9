//! Floor overview - table list filtering and status badges

use serde::{Deserialize, Serialize};
use shared::models::{DiningTable, TableStatus};
use std::collections::BTreeMap;
use std::fmt;

/// Table list filter selected on the floor overview
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TableFilter {
    #[default]
    All,
    Status(TableStatus),
}

impl TableFilter {
    pub fn matches(&self, table: &DiningTable) -> bool {
        match self {
            TableFilter::All => true,
            TableFilter::Status(status) => table.status == *status,
        }
    }
}

impl fmt::Display for TableFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFilter::All => f.write_str("All"),
            TableFilter::Status(status) => write!(f, "{}", status),
        }
    }
}

/// Tables passing `filter`, in floor order
pub fn filter_tables(
    tables: &[DiningTable],
    filter: TableFilter,
) -> impl Iterator<Item = &DiningTable> + Clone {
    tables.iter().filter(move |table| filter.matches(table))
}

/// Whether a new order can be started at this table
///
/// Tables that are billing are locked until payment is done.
pub fn is_orderable(table: &DiningTable) -> bool {
    table.status != TableStatus::Billing
}

/// Number of tables per status; statuses with no tables are omitted
pub fn status_counts(tables: &[DiningTable]) -> BTreeMap<TableStatus, usize> {
    let mut counts = BTreeMap::new();
    for table in tables {
        *counts.entry(table.status).or_insert(0) += 1;
    }
    counts
}

/// Badge text for a table card
pub fn badge_label(table: &DiningTable) -> String {
    match (table.status, table.customer_count) {
        (TableStatus::Occupied, Some(count)) if count > 0 => format!("{} People", count),
        (status, _) => status.to_string(),
    }
}
