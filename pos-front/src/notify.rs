//! Order confirmation notifications
//!
//! The cart's job ends at producing a [`ConfirmedOrder`]; a
//! [`NotificationSink`] decides how the confirmation is shown or forwarded.

use serde::{Deserialize, Serialize};
use shared::order::ConfirmedOrder;
use std::sync::Mutex;

/// Receiver of confirmed orders
pub trait NotificationSink {
    fn order_confirmed(&self, order: &ConfirmedOrder);
}

/// Toast message shown after a confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn order_confirmed(order: &ConfirmedOrder) -> Self {
        Self {
            title: "Order Confirmed!".to_string(),
            description: format!(
                "Order for Table {} has been sent to the kitchen.",
                order.table.number
            ),
        }
    }
}

/// In-memory toast queue, drained by the UI
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all pending toasts, oldest first
    pub fn drain(&self) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *toasts)
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for ToastQueue {
    fn order_confirmed(&self, order: &ConfirmedOrder) {
        let toast = Toast::order_confirmed(order);
        self.toasts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(toast);
    }
}

/// Sink that only writes the confirmation to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn order_confirmed(&self, order: &ConfirmedOrder) {
        tracing::info!(
            table = order.table.number,
            items = order.item_count(),
            total = %order.total,
            "Order sent to the kitchen"
        );
    }
}
