// orderdesk_app/src/web/routes.rs

use actix_web::web;

use super::extractors;
use super::handlers::{order_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the HTTP tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(extractors::json_config())
    .app_data(extractors::path_config())
    .app_data(extractors::query_config())
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/v1")
        .service(
          web::scope("/products")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler))
            .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
            .route("/{product_id}", web::put().to(product_handlers::update_product_handler)),
        )
        .service(
          web::scope("/orders")
            .route("", web::get().to(order_handlers::list_orders_in_interval_handler))
            .route("", web::post().to(order_handlers::create_order_handler))
            .route("/{order_id}", web::get().to(order_handlers::get_order_handler)),
        ),
    );
}
