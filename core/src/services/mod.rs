// orderdesk/src/services/mod.rs

//! Product and order services. Each call is an independent, stateless
//! transaction against the stores it was built with.

pub mod order;
pub mod product;

pub use order::{NewOrderRequest, OrderService};
pub use product::ProductService;
