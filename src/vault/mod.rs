//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - The `Record` type and ordered field maps (`record`)
//! - The on-disk JSON vault format with atomic writes (`format`)
//! - The high-level `VaultStore` for opening and managing vaults (`store`)

pub mod format;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use format::VaultDocument;
pub use record::{FieldMap, Record};
pub use store::{AddOutcome, VaultStore};
