// orderdesk/src/ids.rs

use uuid::Uuid;

/// Source of identifiers for newly created records.
pub trait IdGenerator: Send + Sync {
  fn generate(&self) -> Uuid;
}

/// Random (version 4) identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
  fn generate(&self) -> Uuid {
    Uuid::new_v4()
  }
}
