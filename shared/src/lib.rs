//! Shared types for the Gerant console
//!
//! Entity records with their backend wire mapping, the form types used to
//! build create/update payloads, client-side validation, search matching and
//! the derived reservation status.

pub mod error;
pub mod models;
pub mod search;
pub mod util;

// Re-exports
pub use error::{ValidationError, ValidationResult};
pub use models::*;
pub use search::Searchable;
pub use serde::{Deserialize, Serialize};

/// Primary key type used by every backend resource
pub type RecordId = i64;
