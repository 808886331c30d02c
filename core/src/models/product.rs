// orderdesk/src/models/product.rs

use rust_decimal::Decimal;
use uuid::Uuid;

/// Maximum number of characters in a product name.
pub const PRODUCT_NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub price: Decimal,
}

/// A validated product that has not been given an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
  pub name: String,
  pub price: Decimal,
}

impl NewProduct {
  pub fn into_product(self, id: Uuid) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
    }
  }
}

/// Partial update of a product. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub price: Option<Decimal>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.price.is_none()
  }

  /// Overwrites each field of `product` that this patch carries.
  pub fn apply_to(self, product: &mut Product) {
    if let Some(name) = self.name {
      product.name = name;
    }
    if let Some(price) = self.price {
      product.price = price;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal::Decimal;

  fn sample() -> Product {
    Product {
      id: Uuid::new_v4(),
      name: "keyboard".to_string(),
      price: Decimal::new(4999, 2),
    }
  }

  #[test]
  fn empty_patch_leaves_product_unchanged() {
    let mut product = sample();
    let before = product.clone();
    let patch = ProductPatch::default();
    assert!(patch.is_empty());
    patch.apply_to(&mut product);
    assert_eq!(product, before);
  }

  #[test]
  fn patch_overwrites_only_present_fields() {
    let mut product = sample();
    ProductPatch {
      name: None,
      price: Some(Decimal::new(25, 0)),
    }
    .apply_to(&mut product);
    assert_eq!(product.name, "keyboard");
    assert_eq!(product.price, Decimal::new(25, 0));

    ProductPatch {
      name: Some("mouse".to_string()),
      price: None,
    }
    .apply_to(&mut product);
    assert_eq!(product.name, "mouse");
    assert_eq!(product.price, Decimal::new(25, 0));
  }
}
