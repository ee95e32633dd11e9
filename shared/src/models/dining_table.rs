//! Dining Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table status shown on the floor overview
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum TableStatus {
    #[default]
    Free,
    Occupied,
    Serving,
    /// 结账中 - cannot start a new order
    Billing,
}

impl TableStatus {
    /// All statuses in filter-menu order
    pub const ALL: [TableStatus; 4] = [
        TableStatus::Free,
        TableStatus::Occupied,
        TableStatus::Serving,
        TableStatus::Billing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Free => "Free",
            TableStatus::Occupied => "Occupied",
            TableStatus::Serving => "Serving",
            TableStatus::Billing => "Billing",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiningTable {
    pub id: i64,
    /// Number printed on the table
    pub number: i32,
    pub status: TableStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_count: Option<i32>,
}

impl DiningTable {
    pub fn new(id: i64, number: i32, status: TableStatus) -> Self {
        Self {
            id,
            number,
            status,
            customer_count: None,
        }
    }

    pub fn with_customers(mut self, count: i32) -> Self {
        self.customer_count = Some(count);
        self
    }
}
