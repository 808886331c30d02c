// orderdesk/src/error.rs
use anyhow::Error as AnyhowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// The kind of record a lookup missed, used in `NotFound` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
  Product,
  Order,
}

impl fmt::Display for EntityKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EntityKind::Product => f.write_str("Product"),
      EntityKind::Order => f.write_str("Order"),
    }
  }
}

/// A single failed validation rule, reported back to the client as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
  pub field: String,
  pub message: String,
}

impl FieldError {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      message: message.into(),
    }
  }
}

#[derive(Debug, Error)]
pub enum OrderdeskError {
  #[error("{entity} with id: {id} could not be found")]
  NotFound { entity: EntityKind, id: Uuid },

  /// An order referenced products that are not in the store.
  /// `ids` holds only the missing identifiers, in request order.
  #[error("The products with the following ids do not exist: [{}]", join_ids(.ids))]
  ProductsNotFound { ids: Vec<Uuid> },

  #[error("Validation failed: {}", join_field_errors(.0))]
  Validation(Vec<FieldError>),

  #[error("Store operation failed. Source: {source}")]
  Store {
    #[source]
    source: AnyhowError,
  },
}

impl OrderdeskError {
  pub fn product_not_found(id: Uuid) -> Self {
    OrderdeskError::NotFound {
      entity: EntityKind::Product,
      id,
    }
  }

  pub fn order_not_found(id: Uuid) -> Self {
    OrderdeskError::NotFound {
      entity: EntityKind::Order,
      id,
    }
  }
}

// Store backends report faults as anyhow::Error; they pass through untouched.
impl From<AnyhowError> for OrderdeskError {
  fn from(err: AnyhowError) -> Self {
    OrderdeskError::Store { source: err }
  }
}

fn join_ids(ids: &[Uuid]) -> String {
  ids.iter().map(Uuid::to_string).collect::<Vec<_>>().join(", ")
}

fn join_field_errors(errors: &[FieldError]) -> String {
  errors
    .iter()
    .map(|e| format!("{}: {}", e.field, e.message))
    .collect::<Vec<_>>()
    .join("; ")
}

pub type OrderdeskResult<T, E = OrderdeskError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_found_message_names_entity_and_id() {
    let id = Uuid::parse_str("b2abf4cd-7498-4ee0-a6d6-13c4060266ef").unwrap();
    let err = OrderdeskError::order_not_found(id);
    assert_eq!(
      err.to_string(),
      "Order with id: b2abf4cd-7498-4ee0-a6d6-13c4060266ef could not be found"
    );
  }

  #[test]
  fn products_not_found_lists_every_missing_id() {
    let a = Uuid::parse_str("a2aaa4aa-7498-4ee0-a6d6-13c4060266ef").unwrap();
    let b = Uuid::parse_str("b2abf4cd-7498-4ee0-a6d6-13c4060266ef").unwrap();
    let err = OrderdeskError::ProductsNotFound { ids: vec![a, b] };
    assert_eq!(
      err.to_string(),
      "The products with the following ids do not exist: \
       [a2aaa4aa-7498-4ee0-a6d6-13c4060266ef, b2abf4cd-7498-4ee0-a6d6-13c4060266ef]"
    );
  }

  #[test]
  fn anyhow_errors_become_store_errors() {
    let err: OrderdeskError = anyhow::anyhow!("connection reset").into();
    match err {
      OrderdeskError::Store { source } => assert_eq!(source.to_string(), "connection reset"),
      other => panic!("Expected OrderdeskError::Store, got {:?}", other),
    }
  }
}
