// orderdesk_app/src/web/extractors.rs

//! Extractor configuration: turns actix's decode failures into the same
//! field-level 400 responses that validation produces.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};

use crate::errors::AppError;

pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
    let message = match &err {
      JsonPayloadError::Deserialize(e) => e.to_string(),
      other => other.to_string(),
    };
    tracing::warn!(error = %message, "Rejected malformed JSON body.");
    AppError::bad_field("body", message).into()
  })
}

pub fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
    tracing::warn!(error = %err, path = %req.path(), "Rejected malformed path parameter.");
    AppError::bad_field("id", err.to_string()).into()
  })
}

pub fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
    tracing::warn!(error = %err, "Rejected malformed query string.");
    AppError::bad_field("query", err.to_string()).into()
  })
}
