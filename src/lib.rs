//! Quill - a minimal blogging platform.
//!
//! Users publish short text posts, optionally filed under a group,
//! and browse paginated listings by recency, group, or author.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod posts;
pub mod web;

pub use auth::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{QuillError, Result};
pub use posts::{
    Group, GroupRepository, NewGroup, NewPost, Page, Paginator, Post, PostForm, PostListing,
    PostRepository, PostUpdate,
};
pub use web::WebServer;
