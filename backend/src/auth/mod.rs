//! Authentication module
//!
//! Provides JWT bearer authentication, bcrypt password hashing and the
//! per-route role policy.

mod jwt;
mod middleware;
mod password;
mod policy;

pub use jwt::{Claims, JwtService};
pub use middleware::{auth_middleware, authenticate, bearer_token, AuthUser};
pub use password::{PasswordError, PasswordService, HASH_COST};
pub use policy::{authorize_middleware, RoutePolicy};
