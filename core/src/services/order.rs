// orderdesk/src/services/order.rs

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::OrderDto;
use crate::error::{OrderdeskError, OrderdeskResult};
use crate::ids::IdGenerator;
use crate::models::{LineItem, NewOrder, Product};
use crate::store::{OrderStore, ProductStore};

/// A validated order creation command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderRequest {
  pub customer_email: String,
  pub product_ids: Vec<Uuid>,
}

#[derive(Clone)]
pub struct OrderService {
  orders: Arc<dyn OrderStore>,
  products: Arc<dyn ProductStore>,
  ids: Arc<dyn IdGenerator>,
}

impl OrderService {
  pub fn new(orders: Arc<dyn OrderStore>, products: Arc<dyn ProductStore>, ids: Arc<dyn IdGenerator>) -> Self {
    Self { orders, products, ids }
  }

  /// Resolves every requested product, snapshots its price into a line item
  /// and persists the order. Nothing is written if any product is missing.
  #[instrument(
    name = "order_service::create",
    skip(self, request),
    fields(requested = request.product_ids.len()),
    err(Display)
  )]
  pub async fn create(&self, request: NewOrderRequest) -> OrderdeskResult<OrderDto> {
    let requested = dedup_preserving_order(&request.product_ids);
    let products = self.resolve_products(&requested).await?;

    let items = products.iter().map(LineItem::snapshot).collect();
    let new_order = NewOrder::new(self.ids.generate(), request.customer_email, items).inspect_err(|_| {
      warn!(products = products.len(), "Order total overflows the decimal range.");
    })?;
    let saved = self.orders.save(new_order).await?;

    info!(
      order_id = %saved.id,
      items = saved.items.len(),
      total_price = %saved.total_price,
      "Order created."
    );
    Ok(saved.into())
  }

  #[instrument(name = "order_service::get_by_id", skip(self), err(Display))]
  pub async fn get_by_id(&self, id: Uuid) -> OrderdeskResult<OrderDto> {
    match self.orders.get(id).await? {
      Some(order) => Ok(order.into()),
      None => {
        warn!(order_id = %id, "Order not found.");
        Err(OrderdeskError::order_not_found(id))
      }
    }
  }

  /// Orders created within `[start, end]`, both bounds included.
  #[instrument(name = "order_service::get_all_in_time_interval", skip(self), err(Display))]
  pub async fn get_all_in_time_interval(
    &self,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
  ) -> OrderdeskResult<Vec<OrderDto>> {
    let orders = self.orders.find_by_created_between(start, end).await?;
    info!("Fetched {} orders in interval.", orders.len());
    Ok(orders.into_iter().map(OrderDto::from).collect())
  }

  /// Returns the products for `ids` in the same order as `ids`, or
  /// `ProductsNotFound` naming exactly the ids the store did not return.
  async fn resolve_products(&self, ids: &[Uuid]) -> OrderdeskResult<Vec<Product>> {
    let mut found: HashMap<Uuid, Product> = self
      .products
      .find_all_by_ids(ids)
      .await?
      .into_iter()
      .map(|p| (p.id, p))
      .collect();

    let missing: Vec<Uuid> = ids.iter().filter(|id| !found.contains_key(*id)).copied().collect();
    if !missing.is_empty() {
      warn!(missing = ?missing, "Order references unknown products.");
      return Err(OrderdeskError::ProductsNotFound { ids: missing });
    }

    // Every id is present in `found` at this point.
    Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
  }
}

fn dedup_preserving_order(ids: &[Uuid]) -> Vec<Uuid> {
  let mut seen = HashSet::with_capacity(ids.len());
  ids.iter().filter(|id| seen.insert(**id)).copied().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dedup_keeps_first_occurrence_order() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let c = Uuid::new_v4();
    assert_eq!(dedup_preserving_order(&[b, a, b, c, a]), vec![b, a, c]);
    assert!(dedup_preserving_order(&[]).is_empty());
  }
}
