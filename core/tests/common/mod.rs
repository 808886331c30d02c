// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use chrono::{DateTime, TimeZone, Utc};
use orderdesk::{
  IdGenerator, ManualClock, MemoryOrderStore, MemoryProductStore, NewProduct, OrderService, ProductDto, ProductService,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::{
  atomic::{AtomicU64, Ordering},
  Arc,
};
use tracing::Level;
use uuid::Uuid;

// --- Deterministic identifiers ---
#[derive(Debug, Default)]
pub struct SequentialIds {
  next: AtomicU64,
}

impl IdGenerator for SequentialIds {
  fn generate(&self) -> Uuid {
    let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
    Uuid::from_u128(n as u128)
  }
}

// --- Services wired to in-memory stores ---
pub struct Fixture {
  pub products: Arc<MemoryProductStore>,
  pub orders: Arc<MemoryOrderStore>,
  pub clock: Arc<ManualClock>,
  pub product_service: ProductService,
  pub order_service: OrderService,
}

pub fn start_time() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2020, 11, 9, 0, 0, 0).unwrap()
}

impl Fixture {
  pub fn new() -> Self {
    setup_tracing();
    let ids: Arc<dyn IdGenerator> = Arc::new(SequentialIds::default());
    let products = Arc::new(MemoryProductStore::new());
    let clock = Arc::new(ManualClock::new(start_time()));
    let orders = Arc::new(MemoryOrderStore::with_clock(clock.clone()));

    let product_service = ProductService::new(products.clone(), ids.clone());
    let order_service = OrderService::new(orders.clone(), products.clone(), ids);

    Self {
      products,
      orders,
      clock,
      product_service,
      order_service,
    }
  }

  pub async fn add_product(&self, name: &str, price: &str) -> ProductDto {
    self
      .product_service
      .create(NewProduct {
        name: name.to_string(),
        price: dec(price),
      })
      .await
      .unwrap()
  }
}

pub fn dec(raw: &str) -> Decimal {
  Decimal::from_str(raw).unwrap()
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
