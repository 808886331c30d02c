// orderdesk/src/store/mod.rs

//! Persistence interfaces. Services only see these traits; a backend can be
//! SQL, an embedded key-value store or the in-memory maps in `memory`.
//!
//! Backends report faults as `anyhow::Error`. Services do not retry and do not
//! inspect them.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{NewOrder, Order, Product};

#[async_trait]
pub trait ProductStore: Send + Sync {
  async fn get(&self, id: Uuid) -> anyhow::Result<Option<Product>>;

  /// Every stored product, ordered by name then id.
  async fn find_all(&self) -> anyhow::Result<Vec<Product>>;

  /// One batch lookup. Unknown ids are skipped; result order is unspecified.
  async fn find_all_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Product>>;

  /// Inserts, or replaces the product with the same id.
  async fn save(&self, product: Product) -> anyhow::Result<Product>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
  async fn get(&self, id: Uuid) -> anyhow::Result<Option<Order>>;

  /// Persists the order with its line items and stamps `created_at`.
  async fn save(&self, order: NewOrder) -> anyhow::Result<Order>;

  /// Orders with `start <= created_at <= end`, oldest first.
  async fn find_by_created_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> anyhow::Result<Vec<Order>>;
}
