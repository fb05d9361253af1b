use chrono::Utc;
use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Order, OrderCreate, OrderStatus};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Kitchen finished preparing the order.
    Complete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// `false` when the order was already completed.
    Completed(bool),
}

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = (); // Placed orders are immutable apart from their status
    type Action = OrderAction;
    type ActionResult = OrderActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order starts as `Pending` and copies the invoice totals.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, FrameworkError> {
        if params.invoice.items.is_empty() {
            return Err(FrameworkError::Rejected("order has no items".to_string()));
        }
        if !params.customer.is_complete() {
            return Err(FrameworkError::Rejected("customer name and email are required".to_string()));
        }
        let invoice = params.invoice;
        Ok(Self {
            id,
            user_id: params.user_id,
            customer: params.customer,
            placed_at: Utc::now(),
            items: invoice.items,
            subtotal: invoice.subtotal,
            vat: invoice.vat,
            delivery: invoice.delivery,
            total: invoice.total,
            status: OrderStatus::Pending,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), FrameworkError> {
        Ok(())
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, FrameworkError> {
        match action {
            OrderAction::Complete => {
                let changed = self.status != OrderStatus::Completed;
                self.status = OrderStatus::Completed;
                Ok(OrderActionResult::Completed(changed))
            }
        }
    }
}
