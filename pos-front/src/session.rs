//! Per-session UI state
//!
//! Everything the waiter screen remembers between events lives in one
//! [`UiSession`] value owned by that session: sidebar state, the active
//! table filter, the order being composed and the orders confirmed so far.

use crate::cart::OrderCart;
use crate::floor::{self, TableFilter};
use crate::notify::NotificationSink;
use shared::error::{CartError, ErrorCode};
use shared::models::{CatalogItem, DiningTable};
use shared::order::{ConfirmedOrder, TableRef};
use std::ops::Deref;
use thiserror::Error;

/// Session-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Table {0} is billing and cannot take a new order")]
    TableNotOrderable(i32),

    #[error("No order is open")]
    NoOpenOrder,

    #[error(transparent)]
    Cart(#[from] CartError),
}

impl SessionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::TableNotOrderable(_) => ErrorCode::TableNotOrderable,
            SessionError::NoOpenOrder => ErrorCode::OrderNotOpen,
            SessionError::Cart(e) => e.code(),
        }
    }
}

/// Line-editing handle on the session's open order
///
/// Reads go through [`Deref`] to the cart. Confirming and cancelling are
/// only reachable through [`UiSession::confirm_order`] and
/// [`UiSession::cancel_order`], so the session always sees the transition.
#[derive(Debug)]
pub struct OrderDraft<'a> {
    cart: &'a mut OrderCart,
}

impl OrderDraft<'_> {
    pub fn add_item(&mut self, item: &CatalogItem) -> Result<(), CartError> {
        self.cart.add_item(item)
    }

    pub fn set_quantity(&mut self, line_id: i64, new_quantity: i32) -> Result<(), CartError> {
        self.cart.set_quantity(line_id, new_quantity)
    }
}

impl Deref for OrderDraft<'_> {
    type Target = OrderCart;

    fn deref(&self) -> &OrderCart {
        self.cart
    }
}

/// UI state of one waiter session
#[derive(Debug, Default)]
pub struct UiSession {
    sidebar_expanded: bool,
    table_filter: TableFilter,
    current: Option<OrderCart>,
    confirmed: Vec<ConfirmedOrder>,
}

impl UiSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Sidebar ==========

    pub fn expand_sidebar(&mut self) {
        self.sidebar_expanded = true;
    }

    pub fn collapse_sidebar(&mut self) {
        self.sidebar_expanded = false;
    }

    pub fn is_sidebar_expanded(&self) -> bool {
        self.sidebar_expanded
    }

    // ========== Floor filter ==========

    pub fn set_table_filter(&mut self, filter: TableFilter) {
        tracing::debug!(filter = %filter, "Table filter changed");
        self.table_filter = filter;
    }

    pub fn table_filter(&self) -> TableFilter {
        self.table_filter
    }

    /// Tables shown under the active filter
    pub fn visible_tables<'a>(&self, tables: &'a [DiningTable]) -> Vec<&'a DiningTable> {
        floor::filter_tables(tables, self.table_filter).collect()
    }

    // ========== Ordering ==========

    /// Start composing an order for `table`
    ///
    /// An order still open for another table is cancelled first.
    pub fn open_order(&mut self, table: &DiningTable) -> Result<OrderDraft<'_>, SessionError> {
        if !floor::is_orderable(table) {
            tracing::warn!(table = table.number, "Refused to open order on billing table");
            return Err(SessionError::TableNotOrderable(table.number));
        }

        if let Some(mut previous) = self.current.take()
            && previous.cancel().is_ok()
        {
            tracing::info!(
                table = previous.table().number,
                "Discarded open order when switching tables"
            );
        }

        let cart = self.current.insert(OrderCart::open(TableRef::from(table)));
        Ok(OrderDraft { cart })
    }

    pub fn current_order(&self) -> Option<&OrderCart> {
        self.current.as_ref()
    }

    pub fn current_order_mut(&mut self) -> Option<OrderDraft<'_>> {
        self.current.as_mut().map(|cart| OrderDraft { cart })
    }

    /// Confirm the open order, notify `sink` and close the order popup
    ///
    /// On failure the order stays open so the waiter can fix it.
    pub fn confirm_order(
        &mut self,
        sink: &dyn NotificationSink,
    ) -> Result<ConfirmedOrder, SessionError> {
        let cart = self.current.as_mut().ok_or(SessionError::NoOpenOrder)?;
        let order = cart.confirm()?;

        sink.order_confirmed(&order);
        self.confirmed.push(order.clone());
        self.current = None;
        Ok(order)
    }

    /// Cancel the open order and close the order popup
    pub fn cancel_order(&mut self) -> Result<(), SessionError> {
        let cart = self.current.as_mut().ok_or(SessionError::NoOpenOrder)?;
        cart.cancel()?;
        self.current = None;
        Ok(())
    }

    /// Orders confirmed during this session, oldest first
    pub fn confirmed_orders(&self) -> &[ConfirmedOrder] {
        &self.confirmed
    }
}
