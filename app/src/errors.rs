// orderdesk_app/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use orderdesk::{FieldError, OrderdeskError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error(transparent)]
  Domain(#[from] OrderdeskError),

  /// The request names a record that must exist for the operation to apply.
  #[error("Unprocessable Entity: {0}")]
  Unprocessable(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl AppError {
  /// A 400 carrying a single field-level failure, used by extractor error handlers.
  pub fn bad_field(field: impl Into<String>, message: impl Into<String>) -> Self {
    AppError::Domain(OrderdeskError::Validation(vec![FieldError::new(field, message)]))
  }

  /// Updates answer 422 rather than 404 when the target product is absent.
  pub fn missing_update_target(err: OrderdeskError) -> Self {
    match err {
      OrderdeskError::NotFound { .. } => AppError::Unprocessable(err.to_string()),
      other => AppError::Domain(other),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Domain(OrderdeskError::NotFound { .. }) => StatusCode::NOT_FOUND,
      AppError::Domain(OrderdeskError::ProductsNotFound { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::Domain(OrderdeskError::Validation(_)) => StatusCode::BAD_REQUEST,
      AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
      AppError::Domain(OrderdeskError::Store { .. })
      | AppError::Config(_)
      | AppError::Sqlx(_)
      | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::info!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }

    let mut response = HttpResponse::build(status);
    match self {
      AppError::Domain(OrderdeskError::Validation(errors)) => response.json(errors),
      AppError::Domain(err @ OrderdeskError::ProductsNotFound { ids }) => response.json(json!({
        "error": err.to_string(),
        "missingProductIds": ids,
      })),
      AppError::Domain(err @ OrderdeskError::NotFound { .. }) => response.json(json!({"error": err.to_string()})),
      AppError::Unprocessable(m) => response.json(json!({"error": m})),
      AppError::Domain(OrderdeskError::Store { .. }) | AppError::Sqlx(_) => {
        response.json(json!({"error": "Database operation failed"}))
      }
      AppError::Config(_) => response.json(json!({"error": "Configuration issue"})),
      AppError::Internal(_) => response.json(json!({"error": "An internal error occurred"})),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  #[test]
  fn status_codes_follow_error_kind() {
    let id = Uuid::new_v4();
    assert_eq!(
      AppError::from(OrderdeskError::product_not_found(id)).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      AppError::from(OrderdeskError::ProductsNotFound { ids: vec![id] }).status_code(),
      StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(AppError::bad_field("id", "bad").status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
      AppError::from(OrderdeskError::from(anyhow::anyhow!("disk full"))).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn missing_update_target_maps_not_found_to_422_only() {
    let id = Uuid::new_v4();
    let err = AppError::missing_update_target(OrderdeskError::product_not_found(id));
    assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let err = AppError::missing_update_target(OrderdeskError::Validation(Vec::new()));
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
  }
}
