//! Order cart - the in-progress order for one table
//!
//! # Lifecycle
//!
//! ```text
//! Open ──confirm (non-empty)──▶ Confirmed
//!   │
//!   └────────cancel───────────▶ Cancelled
//! ```
//!
//! Both end states are terminal. Line changes are only accepted while the
//! cart is `Open`, and a failed operation never changes the cart.

use crate::order_money;
use rust_decimal::Decimal;
use shared::error::CartError;
use shared::models::CatalogItem;
use shared::order::{CartStatus, ConfirmedOrder, LineItem, TableRef};
use shared::util::now_millis;

/// 购物车 - one table's in-progress order
///
/// Owned by a single UI session; not synchronised internally.
#[derive(Debug, Clone)]
pub struct OrderCart {
    table: TableRef,
    lines: Vec<LineItem>,
    status: CartStatus,
}

impl OrderCart {
    /// Open an empty cart for the given table
    pub fn open(table: TableRef) -> Self {
        tracing::debug!(table = table.number, "Order cart opened");
        Self {
            table,
            lines: Vec::new(),
            status: CartStatus::Open,
        }
    }

    pub fn table(&self) -> TableRef {
        self.table
    }

    pub fn status(&self) -> CartStatus {
        self.status
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Look up the line for a catalog item id
    pub fn line(&self, id: i64) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| i64::from(l.quantity)).sum()
    }

    /// Add one unit of a catalog item
    ///
    /// Increments the existing line for `item.id` (capped at
    /// [`order_money::MAX_QUANTITY`]), or appends a new line holding a
    /// snapshot of the item with quantity 1.
    pub fn add_item(&mut self, item: &CatalogItem) -> Result<(), CartError> {
        self.ensure_open()?;

        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => {
                if line.quantity >= order_money::MAX_QUANTITY {
                    tracing::warn!(
                        table = self.table.number,
                        item_id = item.id,
                        max = order_money::MAX_QUANTITY,
                        "Line already at maximum quantity"
                    );
                }
                line.quantity = order_money::clamp_quantity(line.quantity.saturating_add(1));
                tracing::debug!(
                    table = self.table.number,
                    item_id = item.id,
                    quantity = line.quantity,
                    "Line quantity incremented"
                );
            }
            None => {
                self.lines.push(LineItem::from_catalog(item));
                tracing::debug!(
                    table = self.table.number,
                    item_id = item.id,
                    name = %item.name,
                    "Line added"
                );
            }
        }
        Ok(())
    }

    /// Set the quantity of an existing line
    ///
    /// A quantity of zero or less removes the line; larger values are capped
    /// at [`order_money::MAX_QUANTITY`]. Unknown ids fail with
    /// [`CartError::NotFound`] and leave the cart untouched.
    pub fn set_quantity(&mut self, line_id: i64, new_quantity: i32) -> Result<(), CartError> {
        self.ensure_open()?;

        let idx = self
            .lines
            .iter()
            .position(|l| l.id == line_id)
            .ok_or(CartError::NotFound(line_id))?;

        if new_quantity <= 0 {
            let removed = self.lines.remove(idx);
            tracing::debug!(
                table = self.table.number,
                item_id = removed.id,
                "Line removed"
            );
        } else {
            let quantity = order_money::clamp_quantity(new_quantity);
            self.lines[idx].quantity = quantity;
            tracing::debug!(
                table = self.table.number,
                item_id = line_id,
                quantity,
                "Line quantity set"
            );
        }
        Ok(())
    }

    /// Sum of `unit_price * quantity`, rounded to cents. Zero when empty.
    pub fn total(&self) -> Decimal {
        order_money::sum_lines(&self.lines)
    }

    /// Confirm the order and return its snapshot
    ///
    /// State is checked before emptiness, so a confirmed or cancelled cart
    /// always reports `InvalidState`.
    pub fn confirm(&mut self) -> Result<ConfirmedOrder, CartError> {
        self.ensure_open()?;
        if self.lines.is_empty() {
            return Err(CartError::EmptyOrder);
        }

        self.status = CartStatus::Confirmed;
        let order = ConfirmedOrder {
            table: self.table,
            lines: self.lines.clone(),
            total: self.total(),
            confirmed_at: now_millis(),
        };

        tracing::info!(
            table = self.table.number,
            lines = order.lines.len(),
            total = %order.total,
            "Order confirmed"
        );
        Ok(order)
    }

    /// Cancel the order
    pub fn cancel(&mut self) -> Result<(), CartError> {
        self.ensure_open()?;
        self.status = CartStatus::Cancelled;
        tracing::info!(table = self.table.number, "Order cancelled");
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), CartError> {
        if self.status.is_terminal() {
            tracing::warn!(
                table = self.table.number,
                status = %self.status,
                "Rejected operation on closed cart"
            );
            return Err(CartError::InvalidState {
                status: self.status,
            });
        }
        Ok(())
    }
}
