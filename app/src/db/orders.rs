// orderdesk_app/src/db/orders.rs

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use orderdesk::{LineItem, NewOrder, Order, OrderStore};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct OrderRow {
  id: Uuid,
  customer_email: String,
  total_price: Decimal,
  created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct LineItemRow {
  order_id: Uuid,
  product_id: Uuid,
  product_name: String,
  price: Decimal,
}

impl From<LineItemRow> for LineItem {
  fn from(row: LineItemRow) -> Self {
    LineItem {
      product_id: row.product_id,
      product_name: row.product_name,
      price: row.price,
    }
  }
}

impl OrderRow {
  fn into_order(self, items: Vec<LineItem>) -> Order {
    Order {
      id: self.id,
      customer_email: self.customer_email,
      created_at: self.created_at,
      total_price: self.total_price,
      items,
    }
  }
}

const ORDER_COLUMNS: &str = "id, customer_email, total_price, created_at";
const ITEM_COLUMNS: &str = "order_id, product_id, product_name, price";

#[derive(Debug, Clone)]
pub struct PgOrderStore {
  pool: PgPool,
}

impl PgOrderStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Line items for every order in `order_ids`, grouped by order, each group
  /// in insertion order.
  async fn items_for(&self, order_ids: &[Uuid]) -> anyhow::Result<HashMap<Uuid, Vec<LineItem>>> {
    let rows: Vec<LineItemRow> = sqlx::query_as(&format!(
      "SELECT {} FROM order_items WHERE order_id = ANY($1) ORDER BY order_id, position",
      ITEM_COLUMNS
    ))
    .bind(order_ids)
    .fetch_all(&self.pool)
    .await
    .context("fetching order items")?;

    let mut grouped: HashMap<Uuid, Vec<LineItem>> = HashMap::new();
    for row in rows {
      grouped.entry(row.order_id).or_default().push(row.into());
    }
    Ok(grouped)
  }
}

#[async_trait]
impl OrderStore for PgOrderStore {
  async fn get(&self, id: Uuid) -> anyhow::Result<Option<Order>> {
    let row: Option<OrderRow> = sqlx::query_as(&format!("SELECT {} FROM orders WHERE id = $1", ORDER_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("fetching order {}", id))?;

    let Some(row) = row else {
      return Ok(None);
    };
    let mut items = self.items_for(&[id]).await?;
    Ok(Some(row.into_order(items.remove(&id).unwrap_or_default())))
  }

  async fn save(&self, order: NewOrder) -> anyhow::Result<Order> {
    let mut tx = self.pool.begin().await.context("starting order transaction")?;

    // created_at comes from the column default: now(), truncated to the second.
    let row: OrderRow = sqlx::query_as(&format!(
      "INSERT INTO orders (id, customer_email, total_price) VALUES ($1, $2, $3) RETURNING {}",
      ORDER_COLUMNS
    ))
    .bind(order.id)
    .bind(&order.customer_email)
    .bind(order.total_price)
    .fetch_one(&mut *tx)
    .await
    .with_context(|| format!("inserting order {}", order.id))?;

    for (position, item) in order.items.iter().enumerate() {
      sqlx::query(
        "INSERT INTO order_items (order_id, position, product_id, product_name, price) VALUES ($1, $2, $3, $4, $5)",
      )
      .bind(order.id)
      .bind(position as i32)
      .bind(item.product_id)
      .bind(&item.product_name)
      .bind(item.price)
      .execute(&mut *tx)
      .await
      .with_context(|| format!("inserting line item {} of order {}", position, order.id))?;
    }

    tx.commit().await.context("committing order transaction")?;
    Ok(row.into_order(order.items))
  }

  async fn find_by_created_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> anyhow::Result<Vec<Order>> {
    let rows: Vec<OrderRow> = sqlx::query_as(&format!(
      "SELECT {} FROM orders WHERE created_at BETWEEN $1 AND $2 ORDER BY created_at, id",
      ORDER_COLUMNS
    ))
    .bind(start)
    .bind(end)
    .fetch_all(&self.pool)
    .await
    .context("fetching orders by creation time")?;

    if rows.is_empty() {
      return Ok(Vec::new());
    }
    let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
    let mut items = self.items_for(&ids).await?;
    Ok(
      rows
        .into_iter()
        .map(|row| {
          let order_items = items.remove(&row.id).unwrap_or_default();
          row.into_order(order_items)
        })
        .collect(),
    )
  }
}
