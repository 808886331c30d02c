// orderdesk/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::product::Product;
use crate::error::{FieldError, OrderdeskError, OrderdeskResult};

/// Snapshot of a product taken when it was attached to an order.
/// Never follows later edits to the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
  pub product_id: Uuid,
  pub product_name: String,
  pub price: Decimal,
}

impl LineItem {
  pub fn snapshot(product: &Product) -> Self {
    Self {
      product_id: product.id,
      product_name: product.name.clone(),
      price: product.price,
    }
  }
}

/// An order ready to be persisted. The store assigns `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
  pub id: Uuid,
  pub customer_email: String,
  pub total_price: Decimal,
  pub items: Vec<LineItem>,
}

impl NewOrder {
  /// Builds an order whose total is the exact sum of the line item prices.
  /// Fails when that sum does not fit in a `Decimal`.
  pub fn new(id: Uuid, customer_email: String, items: Vec<LineItem>) -> OrderdeskResult<Self> {
    let total_price = items
      .iter()
      .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.price))
      .ok_or_else(|| {
        OrderdeskError::Validation(vec![FieldError::new(
          "productIds",
          "order total exceeds the supported range",
        )])
      })?;
    Ok(Self {
      id,
      customer_email,
      total_price,
      items,
    })
  }

  pub fn into_order(self, created_at: DateTime<Utc>) -> Order {
    Order {
      id: self.id,
      customer_email: self.customer_email,
      created_at,
      total_price: self.total_price,
      items: self.items,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
  pub id: Uuid,
  pub customer_email: String,
  pub created_at: DateTime<Utc>,
  pub total_price: Decimal,
  pub items: Vec<LineItem>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn item(price: &str) -> LineItem {
    LineItem {
      product_id: Uuid::new_v4(),
      product_name: "item".to_string(),
      price: Decimal::from_str(price).unwrap(),
    }
  }

  #[test]
  fn total_is_exact_decimal_sum() {
    let order = NewOrder::new(
      Uuid::new_v4(),
      "buyer@example.com".to_string(),
      vec![item("0.1"), item("0.2"), item("19.99")],
    )
    .unwrap();
    assert_eq!(order.total_price, Decimal::from_str("20.29").unwrap());
  }

  #[test]
  fn order_without_items_totals_zero() {
    let order = NewOrder::new(Uuid::new_v4(), "buyer@example.com".to_string(), Vec::new()).unwrap();
    assert_eq!(order.total_price, Decimal::ZERO);
  }

  #[test]
  fn total_beyond_decimal_range_is_rejected() {
    let half = "50000000000000000000000000000";
    let result = NewOrder::new(
      Uuid::new_v4(),
      "buyer@example.com".to_string(),
      vec![item(half), item(half)],
    );
    match result {
      Err(OrderdeskError::Validation(errors)) => {
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "productIds");
        assert_eq!(errors[0].message, "order total exceeds the supported range");
      }
      other => panic!("Expected Validation error, got {:?}", other),
    }
  }

  #[test]
  fn snapshot_copies_name_and_price() {
    let product = Product {
      id: Uuid::new_v4(),
      name: "lamp".to_string(),
      price: Decimal::new(1050, 2),
    };
    let line = LineItem::snapshot(&product);
    assert_eq!(line.product_id, product.id);
    assert_eq!(line.product_name, "lamp");
    assert_eq!(line.price, Decimal::new(1050, 2));
  }
}
