// orderdesk/src/services/product.rs

use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::ProductDto;
use crate::error::{OrderdeskError, OrderdeskResult};
use crate::ids::IdGenerator;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::store::ProductStore;

#[derive(Clone)]
pub struct ProductService {
  products: Arc<dyn ProductStore>,
  ids: Arc<dyn IdGenerator>,
}

impl ProductService {
  pub fn new(products: Arc<dyn ProductStore>, ids: Arc<dyn IdGenerator>) -> Self {
    Self { products, ids }
  }

  #[instrument(name = "product_service::create", skip(self, new_product), err(Display))]
  pub async fn create(&self, new_product: NewProduct) -> OrderdeskResult<ProductDto> {
    let product = new_product.into_product(self.ids.generate());
    let saved = self.products.save(product).await?;
    info!(product_id = %saved.id, "Product created.");
    Ok(saved.into())
  }

  #[instrument(name = "product_service::get_by_id", skip(self), err(Display))]
  pub async fn get_by_id(&self, id: Uuid) -> OrderdeskResult<ProductDto> {
    self.find(id).await.map(ProductDto::from)
  }

  #[instrument(name = "product_service::get_all", skip(self), err(Display))]
  pub async fn get_all(&self) -> OrderdeskResult<Vec<ProductDto>> {
    let products = self.products.find_all().await?;
    info!("Fetched {} products.", products.len());
    Ok(products.into_iter().map(ProductDto::from).collect())
  }

  /// Applies `patch` to the stored product and returns the merged result.
  #[instrument(name = "product_service::update", skip(self, patch), err(Display))]
  pub async fn update(&self, id: Uuid, patch: ProductPatch) -> OrderdeskResult<ProductDto> {
    let mut product = self.find(id).await?;
    if patch.is_empty() {
      info!(product_id = %id, "Empty update, returning current state.");
      return Ok(product.into());
    }
    patch.apply_to(&mut product);
    let saved = self.products.save(product).await?;
    info!(product_id = %saved.id, "Product updated.");
    Ok(saved.into())
  }

  async fn find(&self, id: Uuid) -> OrderdeskResult<Product> {
    match self.products.get(id).await? {
      Some(product) => Ok(product),
      None => {
        warn!(product_id = %id, "Product not found.");
        Err(OrderdeskError::product_not_found(id))
      }
    }
  }
}
