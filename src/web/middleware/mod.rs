//! Middleware for the Quill web API.

pub mod auth;
pub mod cors;

pub use auth::{jwt_auth, JwtClaims, JwtState, RequireUser};
pub use cors::create_cors_layer;
