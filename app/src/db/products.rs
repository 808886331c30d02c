// orderdesk_app/src/db/products.rs

use anyhow::Context;
use async_trait::async_trait;
use orderdesk::{Product, ProductStore};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct ProductRow {
  id: Uuid,
  name: String,
  price: Decimal,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      name: row.name,
      price: row.price,
    }
  }
}

#[derive(Debug, Clone)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  async fn get(&self, id: Uuid) -> anyhow::Result<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as("SELECT id, name, price FROM products WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .with_context(|| format!("fetching product {}", id))?;
    Ok(row.map(Product::from))
  }

  async fn find_all(&self) -> anyhow::Result<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as("SELECT id, name, price FROM products ORDER BY name ASC, id ASC")
      .fetch_all(&self.pool)
      .await
      .context("listing products")?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  async fn find_all_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as("SELECT id, name, price FROM products WHERE id = ANY($1)")
      .bind(ids)
      .fetch_all(&self.pool)
      .await
      .context("fetching products by id")?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  async fn save(&self, product: Product) -> anyhow::Result<Product> {
    let row: ProductRow = sqlx::query_as(
      "INSERT INTO products (id, name, price) VALUES ($1, $2, $3) \
       ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, price = EXCLUDED.price \
       RETURNING id, name, price",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(product.price)
    .fetch_one(&self.pool)
    .await
    .with_context(|| format!("saving product {}", product.id))?;
    Ok(row.into())
  }
}
