// orderdesk_app/src/state.rs
use orderdesk::{IdGenerator, OrderService, OrderStore, ProductService, ProductStore, RandomIds};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub product_service: ProductService,
  pub order_service: OrderService,
}

impl AppState {
  /// Wires both services to the given stores with random identifiers.
  pub fn from_stores(products: Arc<dyn ProductStore>, orders: Arc<dyn OrderStore>) -> Self {
    let ids: Arc<dyn IdGenerator> = Arc::new(RandomIds);
    Self {
      product_service: ProductService::new(products.clone(), ids.clone()),
      order_service: OrderService::new(orders, products, ids),
    }
  }
}
