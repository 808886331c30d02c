// orderdesk_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use orderdesk::{CreateProductRequest, UpdateProductRequest};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.product_service.get_all().await?;
  if products.is_empty() {
    info!("Received empty products list.");
    return Ok(HttpResponse::NoContent().finish());
  }
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.product_service.get_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, req_payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
  let new_product = req_payload.into_inner().validate()?;
  let product = app_state.product_service.create(new_product).await?;
  info!(product_id = %product.id, "Product created via API.");
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, req_payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  req_payload: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
  let patch = req_payload.into_inner().validate()?;
  let product = app_state
    .product_service
    .update(path.into_inner(), patch)
    .await
    .map_err(AppError::missing_update_target)?;
  Ok(HttpResponse::Ok().json(product))
}
