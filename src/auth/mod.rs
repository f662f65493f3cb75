//! Authentication primitives for Quill.
//!
//! Password hashing lives here; token issuance and the request guard
//! are part of the web layer.

mod password;

pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
