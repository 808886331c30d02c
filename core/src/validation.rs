// orderdesk/src/validation.rs

//! Request payloads as they arrive from a client, and the checks that turn
//! them into typed commands.
//!
//! Every field is optional at this stage so a missing field is reported the
//! same way as an invalid one. Each `validate` collects all failures before
//! returning.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::error::{FieldError, OrderdeskError, OrderdeskResult};
use crate::models::product::PRODUCT_NAME_MAX_LEN;
use crate::models::{NewProduct, ProductPatch};
use crate::services::NewOrderRequest;

const MUST_NOT_BE_NULL: &str = "must not be null";
const MUST_BE_POSITIVE: &str = "must be greater than 0";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProductRequest {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
  pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
  pub price: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
  #[serde(default)]
  pub customer_email: Option<String>,
  #[serde(default)]
  pub product_ids: Option<Vec<Uuid>>,
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
  if name.chars().count() > PRODUCT_NAME_MAX_LEN {
    errors.push(FieldError::new(
      "name",
      format!("size must be between 0 and {}", PRODUCT_NAME_MAX_LEN),
    ));
  }
}

fn check_price(price: Decimal, errors: &mut Vec<FieldError>) {
  if price <= Decimal::ZERO {
    errors.push(FieldError::new("price", MUST_BE_POSITIVE));
  }
}

fn finish<T>(value: Option<T>, errors: Vec<FieldError>) -> OrderdeskResult<T> {
  match value {
    Some(value) if errors.is_empty() => Ok(value),
    _ => {
      debug!(failures = errors.len(), "Request payload rejected by validation.");
      Err(OrderdeskError::Validation(errors))
    }
  }
}

impl CreateProductRequest {
  pub fn validate(self) -> OrderdeskResult<NewProduct> {
    let mut errors = Vec::new();

    match &self.name {
      Some(name) => check_name(name, &mut errors),
      None => errors.push(FieldError::new("name", MUST_NOT_BE_NULL)),
    }
    match self.price {
      Some(price) => check_price(price, &mut errors),
      None => errors.push(FieldError::new("price", MUST_NOT_BE_NULL)),
    }

    let product = match (self.name, self.price) {
      (Some(name), Some(price)) => Some(NewProduct { name, price }),
      _ => None,
    };
    finish(product, errors)
  }
}

impl UpdateProductRequest {
  pub fn validate(self) -> OrderdeskResult<ProductPatch> {
    let mut errors = Vec::new();

    if let Some(name) = &self.name {
      check_name(name, &mut errors);
    }
    if let Some(price) = self.price {
      check_price(price, &mut errors);
    }

    finish(
      Some(ProductPatch {
        name: self.name,
        price: self.price,
      }),
      errors,
    )
  }
}

impl CreateOrderRequest {
  pub fn validate(self) -> OrderdeskResult<NewOrderRequest> {
    let mut errors = Vec::new();

    match &self.customer_email {
      Some(email) if !email.validate_email() => {
        errors.push(FieldError::new("customerEmail", "must be a well-formed email address"))
      }
      Some(_) => {}
      None => errors.push(FieldError::new("customerEmail", MUST_NOT_BE_NULL)),
    }
    match &self.product_ids {
      Some(ids) if ids.is_empty() => errors.push(FieldError::new("productIds", "must not be empty")),
      Some(_) => {}
      None => errors.push(FieldError::new("productIds", "must not be empty")),
    }

    let request = match (self.customer_email, self.product_ids) {
      (Some(customer_email), Some(product_ids)) => Some(NewOrderRequest {
        customer_email,
        product_ids,
      }),
      _ => None,
    };
    finish(request, errors)
  }
}
