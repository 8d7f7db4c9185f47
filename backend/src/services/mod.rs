//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the stores and the token service.

pub mod product;
pub mod user;

pub use product::ProductService;
pub use user::UserService;
