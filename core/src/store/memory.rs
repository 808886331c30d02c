// orderdesk/src/store/memory.rs

//! In-memory store backends, used by tests and by the server's `memory`
//! backend for local runs without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::{OrderStore, ProductStore};
use crate::clock::{truncate_to_seconds, Clock, SystemClock};
use crate::models::{NewOrder, Order, Product};

// Lock guards in this module are never held across an `.await`.

#[derive(Debug, Default)]
pub struct MemoryProductStore {
  products: RwLock<HashMap<Uuid, Product>>,
}

impl MemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.products.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.read().is_empty()
  }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
  async fn get(&self, id: Uuid) -> anyhow::Result<Option<Product>> {
    Ok(self.products.read().get(&id).cloned())
  }

  async fn find_all(&self) -> anyhow::Result<Vec<Product>> {
    let mut products: Vec<Product> = self.products.read().values().cloned().collect();
    products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    Ok(products)
  }

  async fn find_all_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Product>> {
    let guard = self.products.read();
    Ok(guard.values().filter(|p| ids.contains(&p.id)).cloned().collect())
  }

  async fn save(&self, product: Product) -> anyhow::Result<Product> {
    self.products.write().insert(product.id, product.clone());
    Ok(product)
  }
}

pub struct MemoryOrderStore {
  orders: RwLock<HashMap<Uuid, Order>>,
  clock: Arc<dyn Clock>,
}

impl MemoryOrderStore {
  pub fn new() -> Self {
    Self::with_clock(Arc::new(SystemClock))
  }

  pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
    Self {
      orders: RwLock::new(HashMap::new()),
      clock,
    }
  }

  pub fn len(&self) -> usize {
    self.orders.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.read().is_empty()
  }
}

impl Default for MemoryOrderStore {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for MemoryOrderStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("MemoryOrderStore")
      .field("orders", &self.orders.read().len())
      .finish_non_exhaustive()
  }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
  async fn get(&self, id: Uuid) -> anyhow::Result<Option<Order>> {
    Ok(self.orders.read().get(&id).cloned())
  }

  async fn save(&self, order: NewOrder) -> anyhow::Result<Order> {
    let mut guard = self.orders.write();
    if guard.contains_key(&order.id) {
      anyhow::bail!("order {} already exists", order.id);
    }
    let stored = order.into_order(truncate_to_seconds(self.clock.now()));
    guard.insert(stored.id, stored.clone());
    Ok(stored)
  }

  async fn find_by_created_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> anyhow::Result<Vec<Order>> {
    let mut orders: Vec<Order> = self
      .orders
      .read()
      .values()
      .filter(|o| o.created_at >= start && o.created_at <= end)
      .cloned()
      .collect();
    orders.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    Ok(orders)
  }
}
