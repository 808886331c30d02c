// orderdesk/src/dto.rs

//! Response shapes returned by the services and serialized by the transport.

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{LineItem, Order, Product};

/// `yyyy-MM-dd'T'HH:mm:ss`, always UTC. Used for both input and output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
  at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
  NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).map(|naive| naive.and_utc())
}

pub(crate) mod timestamp_format {
  use super::{format_timestamp, parse_timestamp};
  use chrono::{DateTime, Utc};
  use serde::{de, Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&format_timestamp(at))
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
  pub id: Uuid,
  pub name: String,
  #[serde(with = "rust_decimal::serde::arbitrary_precision")]
  pub price: Decimal,
}

impl From<Product> for ProductDto {
  fn from(product: Product) -> Self {
    Self {
      id: product.id,
      name: product.name,
      price: product.price,
    }
  }
}

// Order responses list products as they were when the order was placed.
impl From<LineItem> for ProductDto {
  fn from(item: LineItem) -> Self {
    Self {
      id: item.product_id,
      name: item.product_name,
      price: item.price,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
  pub id: Uuid,
  pub customer_email: String,
  #[serde(with = "timestamp_format")]
  pub timestamp: DateTime<Utc>,
  #[serde(with = "rust_decimal::serde::arbitrary_precision")]
  pub total_price: Decimal,
  pub products: Vec<ProductDto>,
}

impl From<Order> for OrderDto {
  fn from(order: Order) -> Self {
    Self {
      id: order.id,
      customer_email: order.customer_email,
      timestamp: order.created_at,
      total_price: order.total_price,
      products: order.items.into_iter().map(ProductDto::from).collect(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use serde_json::json;

  #[test]
  fn timestamp_round_trips_through_fixed_pattern() {
    let at = parse_timestamp("2020-11-09T01:00:00").unwrap();
    assert_eq!(at, Utc.with_ymd_and_hms(2020, 11, 9, 1, 0, 0).unwrap());
    assert_eq!(format_timestamp(&at), "2020-11-09T01:00:00");
  }

  #[test]
  fn timestamp_rejects_other_patterns() {
    assert!(parse_timestamp("2020-11-09 01:00:00").is_err());
    assert!(parse_timestamp("2020-11-09T01:00:00Z").is_err());
    assert!(parse_timestamp("09/11/2020").is_err());
  }

  #[test]
  fn order_dto_serializes_camel_case_with_exact_numbers() {
    let dto = OrderDto {
      id: Uuid::parse_str("b2abf4cd-7498-4ee0-a6d6-13c4060266ef").unwrap(),
      customer_email: "contact@example.com".to_string(),
      timestamp: Utc.with_ymd_and_hms(2020, 11, 9, 0, 15, 30).unwrap(),
      total_price: Decimal::new(1110, 2),
      products: vec![ProductDto {
        id: Uuid::parse_str("a2aaa4aa-7498-4ee0-a6d6-13c4060266ef").unwrap(),
        name: "lamp".to_string(),
        price: Decimal::new(1110, 2),
      }],
    };

    let value = serde_json::to_value(&dto).unwrap();
    assert_eq!(value["customerEmail"], json!("contact@example.com"));
    assert_eq!(value["timestamp"], json!("2020-11-09T00:15:30"));
    assert_eq!(value["totalPrice"].to_string(), "11.10");
    assert_eq!(value["products"][0]["id"], json!("a2aaa4aa-7498-4ee0-a6d6-13c4060266ef"));

    let back: OrderDto = serde_json::from_value(value).unwrap();
    assert_eq!(back, dto);
  }
}
