// src/lib.rs

//! orderdesk: product catalog and order intake.
//!
//! The crate holds everything that does not depend on a particular transport
//! or database:
//!  - Plain data records for products, orders and their line items.
//!  - Async store traits (`ProductStore`, `OrderStore`) plus in-memory backends.
//!  - Explicit request validation producing field-level errors.
//!  - `ProductService` and `OrderService`, which translate between request
//!    payloads, stored records and response shapes.
//!
//! An HTTP application wires the services to a concrete store and maps
//! `OrderdeskError` variants onto status codes.

pub mod clock;
pub mod dto;
pub mod error;
pub mod ids;
pub mod models;
pub mod services;
pub mod store;
pub mod validation;

// --- Re-exports for the Public API ---

pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::dto::{OrderDto, ProductDto};
pub use crate::error::{EntityKind, FieldError, OrderdeskError, OrderdeskResult};
pub use crate::ids::{IdGenerator, RandomIds};
pub use crate::models::{LineItem, NewOrder, NewProduct, Order, Product, ProductPatch};
pub use crate::services::{NewOrderRequest, OrderService, ProductService};
pub use crate::store::memory::{MemoryOrderStore, MemoryProductStore};
pub use crate::store::{OrderStore, ProductStore};
pub use crate::validation::{CreateOrderRequest, CreateProductRequest, UpdateProductRequest};
