//! Web API module for Quill.
//!
//! This module provides the JSON HTTP interface: post listings,
//! post creation and editing, and user registration and login.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
