//! Cart status and the confirmed-order snapshot

use super::types::{LineItem, TableRef};
use crate::types::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cart lifecycle status
///
/// `Open` is the only state that accepts line changes. `Confirmed` and
/// `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartStatus {
    #[default]
    Open,
    Confirmed,
    Cancelled,
}

impl CartStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CartStatus::Open)
    }
}

impl fmt::Display for CartStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CartStatus::Open => "open",
            CartStatus::Confirmed => "confirmed",
            CartStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Confirmed order - what gets forwarded to the kitchen notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedOrder {
    pub table: TableRef,
    pub lines: Vec<LineItem>,
    /// Order total, rounded to cents
    pub total: Decimal,
    /// Confirmation time (Unix millis)
    pub confirmed_at: Timestamp,
}

impl ConfirmedOrder {
    /// Total number of units across all lines
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| i64::from(l.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(!CartStatus::Open.is_terminal());
        assert!(CartStatus::Confirmed.is_terminal());
        assert!(CartStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_serialize() {
        assert_eq!(
            serde_json::to_string(&CartStatus::Confirmed).unwrap(),
            "\"CONFIRMED\""
        );
        assert_eq!(CartStatus::Cancelled.to_string(), "cancelled");
    }
}
