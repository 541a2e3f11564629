use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fulfillment_core::{DomainError, DomainResult};

/// Order identifier, assigned monotonically starting at 1.
pub type OrderId = u64;

/// Order status lifecycle.
///
/// Stored orders only ever move forward: `pending → processing → completed`.
/// `Failed` marks a rejected creation; rejected orders are counted but never
/// stored, so the variant never appears on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

/// One line of an order, exactly as the customer submitted it.
///
/// Lines are not revalidated against inventory; the two stores are
/// deliberately decoupled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: u64,
    pub name: String,
    pub quantity: u64,
    pub price: f64,
}

/// A stored order. Owned and mutated exclusively by
/// [`OrderStore`](crate::store::OrderStore).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: String,
    pub items: Vec<OrderLine>,
    /// Trusted as supplied by the caller; never recomputed from the lines.
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Command: create an order.
///
/// Every field is optional on the wire so that missing input surfaces as a
/// domain validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOrder {
    pub customer_id: Option<String>,
    pub items: Option<Vec<OrderLine>>,
    pub total_amount: Option<f64>,
}

pub(crate) struct ValidatedOrder {
    pub customer_id: String,
    pub items: Vec<OrderLine>,
    pub total_amount: f64,
}

impl CreateOrder {
    /// Check required fields: a customer id, at least one line, and a
    /// positive total.
    pub(crate) fn validate(self) -> DomainResult<ValidatedOrder> {
        let customer_id = match self.customer_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(DomainError::validation("customerId is required")),
        };
        let items = match self.items {
            Some(items) if !items.is_empty() => items,
            _ => return Err(DomainError::validation("items must be non-empty")),
        };
        let total_amount = match self.total_amount {
            Some(amount) if amount > 0.0 => amount,
            _ => return Err(DomainError::validation("totalAmount is required")),
        };

        Ok(ValidatedOrder {
            customer_id,
            items,
            total_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop_line() -> OrderLine {
        OrderLine {
            item_id: 1,
            name: "Laptop".to_string(),
            quantity: 1,
            price: 999.99,
        }
    }

    fn complete_command() -> CreateOrder {
        CreateOrder {
            customer_id: Some("c1".to_string()),
            items: Some(vec![laptop_line()]),
            total_amount: Some(999.99),
        }
    }

    #[test]
    fn complete_command_validates() {
        let validated = complete_command().validate().unwrap();
        assert_eq!(validated.customer_id, "c1");
        assert_eq!(validated.items.len(), 1);
        assert_eq!(validated.total_amount, 999.99);
    }

    #[test]
    fn missing_customer_is_rejected() {
        let cmd = CreateOrder {
            customer_id: None,
            ..complete_command()
        };
        assert!(matches!(cmd.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn empty_items_are_rejected() {
        let cmd = CreateOrder {
            items: Some(Vec::new()),
            ..complete_command()
        };
        assert!(matches!(cmd.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn zero_total_is_rejected() {
        let cmd = CreateOrder {
            total_amount: Some(0.0),
            ..complete_command()
        };
        assert!(matches!(cmd.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn command_deserializes_from_camel_case_wire_shape() {
        let cmd: CreateOrder = serde_json::from_value(serde_json::json!({
            "customerId": "c1",
            "items": [{ "itemId": 1, "name": "Laptop", "quantity": 1, "price": 999.99 }],
            "totalAmount": 999.99,
        }))
        .unwrap();

        let validated = cmd.validate().unwrap();
        assert_eq!(validated.items[0].item_id, 1);
        assert_eq!(validated.items[0].price, 999.99);
    }

    #[test]
    fn order_serializes_to_camel_case_wire_shape() {
        let order = Order {
            id: 1,
            customer_id: "c1".to_string(),
            items: vec![laptop_line()],
            total_amount: 999.99,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerId"], "c1");
        assert_eq!(json["totalAmount"], 999.99);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["items"][0]["itemId"], 1);
        assert!(json["createdAt"].is_string());
    }
}
