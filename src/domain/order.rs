use chrono::{DateTime, Utc};
use super::cart::{CartItem, Invoice};

/// Lifecycle of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Accepted, kitchen still preparing it.
    Pending,
    Completed,
}

/// Name and email given at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
}

impl CustomerDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into() }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Represents a placed customer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub customer: CustomerDetails,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<CartItem>,
    pub subtotal: f64,
    pub vat: f64,
    pub delivery: f64,
    pub total: f64,
    pub status: OrderStatus,
}

/// Params for creating a new order.
#[derive(Debug)]
pub struct OrderCreate {
    pub user_id: String,
    pub customer: CustomerDetails,
    pub invoice: Invoice,
}

/// Mints an order reference such as `ORD-3F9A0C21B`.
pub fn next_order_id() -> String {
    let raw = uuid::Uuid::new_v4().simple().to_string();
    format!("ORD-{}", raw[..9].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_shape() {
        let id = next_order_id();
        assert_eq!(id.len(), 13);
        assert!(id.starts_with("ORD-"));
        assert!(id[4..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_customer_details_require_both_fields() {
        assert!(CustomerDetails::new("Alex", "alex@example.com").is_complete());
        assert!(!CustomerDetails::new("  ", "alex@example.com").is_complete());
        assert!(!CustomerDetails::new("Alex", "").is_complete());
    }
}
