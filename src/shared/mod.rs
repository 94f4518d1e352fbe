//! Shared Module
//!
//! Types shared across the application: auth data model, configuration
//! and error types.

pub mod auth;
pub mod config;
pub mod error;

pub use auth::{AuthResult, AuthRole, AuthUser, Credentials, TokenPair};
pub use error::AuthError;
