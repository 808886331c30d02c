// orderdesk/src/models/mod.rs

//! Plain data records. Persistence lives behind the traits in `crate::store`.

pub mod order;
pub mod product;

pub use order::{LineItem, NewOrder, Order};
pub use product::{NewProduct, Product, ProductPatch};
