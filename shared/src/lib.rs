//! Inventory Shared Library
//!
//! This crate contains the wire types, role model and validation rules
//! shared between the backend and its API clients.

pub mod errors;
pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::{Identity, Role};
pub use types::*;
