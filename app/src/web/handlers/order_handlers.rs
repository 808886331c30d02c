// orderdesk_app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use orderdesk::dto::parse_timestamp;
use orderdesk::CreateOrderRequest;
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

const TIMESTAMP_PATTERN_HINT: &str = "must match the pattern yyyy-MM-dd'T'HH:mm:ss";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimeIntervalQuery {
  pub start_time: String,
  pub end_time: String,
}

#[instrument(name = "handler::create_order", skip(app_state, req_payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
  let request = req_payload.into_inner().validate()?;
  let order = app_state.order_service.create(request).await?;
  info!(order_id = %order.id, total_price = %order.total_price, "Order created via API.");
  Ok(HttpResponse::Created().json(order))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.order_service.get_by_id(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::list_orders_in_interval", skip(app_state))]
pub async fn list_orders_in_interval_handler(
  app_state: web::Data<AppState>,
  query: web::Query<TimeIntervalQuery>,
) -> Result<HttpResponse, AppError> {
  let start = parse_timestamp(&query.start_time).map_err(|_| AppError::bad_field("startTime", TIMESTAMP_PATTERN_HINT))?;
  let end = parse_timestamp(&query.end_time).map_err(|_| AppError::bad_field("endTime", TIMESTAMP_PATTERN_HINT))?;

  let orders = app_state.order_service.get_all_in_time_interval(start, end).await?;
  if orders.is_empty() {
    info!("Received empty orders list.");
    return Ok(HttpResponse::NoContent().finish());
  }
  Ok(HttpResponse::Ok().json(orders))
}
