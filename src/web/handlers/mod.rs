//! Request handlers for the Quill web API.

pub mod auth;
pub mod posts;

pub use auth::AppState;
