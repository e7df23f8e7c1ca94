//! Table ordering: the open (suspended) order for a table, running totals
//! and order submission.

use serde::Serialize;
use tracing::{info, warn};

use crate::api::{TableNumber, TenantApi};
use crate::cart::Cart;
use crate::error::{Result, StorefrontError};
use crate::i18n::Language;
use crate::models::{
    round_to_cents, OrderSubmission, SubmissionHeader, SubmissionLine, SuspendedOrder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Underway,
    Succeeded,
    Failed,
}

/// A translated toast-style message about an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderNotice {
    pub status: OrderStatus,
    pub message: &'static str,
}

impl OrderNotice {
    pub fn new(status: OrderStatus, language: Language) -> Self {
        let t = language.translations();
        let message = match status {
            OrderStatus::Underway => t.order_underway,
            OrderStatus::Succeeded => t.order_successfully,
            OrderStatus::Failed => t.order_failed,
        };
        Self { status, message }
    }
}

/// Cart plus already-ordered history, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunningTotals {
    pub total_items: f64,
    pub total_price: f64,
}

pub fn running_totals(cart: &Cart, history: Option<&SuspendedOrder>) -> RunningTotals {
    let (items, price) = history
        .map(|order| (order.header.total_items, order.header.total_price))
        .unwrap_or((0.0, 0.0));
    RunningTotals {
        total_items: cart.total_items() as f64 + items,
        total_price: round_to_cents(cart.total_price() + price),
    }
}

/// Request body for `suspend`. New lines are appended to the table's open
/// order when there is one.
pub fn build_submission(
    table: &TableNumber,
    cart: &Cart,
    history: Option<&SuspendedOrder>,
) -> Result<OrderSubmission> {
    if cart.is_empty() {
        return Err(StorefrontError::EmptyCart);
    }
    let items = cart
        .items()
        .iter()
        .map(|line| SubmissionLine {
            id: line.id.clone(),
            quantity: line.quantity,
            comment: line.comment.clone().filter(|c| !c.trim().is_empty()),
        })
        .collect();
    Ok(OrderSubmission {
        data: SubmissionHeader {
            id: history.map(|order| order.header.id.clone()),
            suspend_note: history.and_then(|order| order.header.suspend_note.clone()),
            table_id: table.as_str().to_string(),
        },
        items,
    })
}

pub struct OrderDesk {
    api: TenantApi,
    table: TableNumber,
    language: Language,
    cart: Cart,
    history: Option<SuspendedOrder>,
}

impl OrderDesk {
    pub fn new(api: TenantApi, table: TableNumber, language: Language) -> Self {
        Self {
            api,
            table,
            language,
            cart: Cart::new(),
            history: None,
        }
    }

    pub fn table(&self) -> &TableNumber {
        &self.table
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn history(&self) -> Option<&SuspendedOrder> {
        self.history.as_ref()
    }

    pub fn totals(&self) -> RunningTotals {
        running_totals(&self.cart, self.history.as_ref())
    }

    /// Reload the table's open order. Errors are logged; the history is
    /// left empty.
    pub async fn refresh_history(&mut self) {
        self.history = match self.api.fetch_suspended_order(&self.table).await {
            Ok(order) => order,
            Err(e) => {
                warn!(
                    tenant = %self.api.tenant(),
                    table = %self.table,
                    error = %e,
                    "failed to load order history"
                );
                None
            }
        };
    }

    /// Submit the cart. `notify` sees the "underway" notice before the
    /// request goes out; the returned notice is the outcome. The cart is
    /// cleared and history reloaded only on success.
    pub async fn place_order<F>(&mut self, mut notify: F) -> Result<OrderNotice>
    where
        F: FnMut(&OrderNotice),
    {
        let submission = build_submission(&self.table, &self.cart, self.history.as_ref())?;
        notify(&OrderNotice::new(OrderStatus::Underway, self.language));

        match self.api.submit_order(&submission).await {
            Ok(_) => {
                info!(
                    tenant = %self.api.tenant(),
                    table = %self.table,
                    lines = submission.items.len(),
                    total_items = self.cart.total_items(),
                    "order submitted"
                );
                self.cart.clear();
                self.refresh_history().await;
                Ok(OrderNotice::new(OrderStatus::Succeeded, self.language))
            }
            Err(e) => {
                warn!(
                    tenant = %self.api.tenant(),
                    table = %self.table,
                    error = %e,
                    "order submission failed"
                );
                Ok(OrderNotice::new(OrderStatus::Failed, self.language))
            }
        }
    }
}
