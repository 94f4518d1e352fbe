//! Workio Desktop Client - Main Library
//!
//! Workio is a native desktop client for the Workio job platform, built with
//! egui/eframe. This library implements the client-side authentication flow:
//! login with role-based endpoint selection, registration and password
//! recovery forms, session token persistence and bearer-token HTTP plumbing.
//!
//! # Module Structure
//!
//! - **`shared`** - Data model, configuration and error types
//!   - Roles, credentials, token pairs, user profiles
//!   - `AuthError` taxonomy
//!
//! - **`app`** - The desktop application
//!   - Session store (token persistence)
//!   - HTTP client with bearer-token attachment
//!   - Auth API client and repository
//!   - Login view-model, forms and egui views
//!
//! # Architecture
//!
//! Data flows strictly downward:
//!
//! ```text
//! views -> AppState / LoginViewModel -> AuthRepository -> AuthApiClient -> HttpClient -> network
//! ```
//!
//! The session store is shared state read by the HTTP client on every request
//! and written by the repository after a successful login.
//!
//! # Error Handling
//!
//! Fallible operations return `Result<T, AuthError>`. Validation errors never
//! leave the form layer; network and business errors propagate up to the
//! view-model, which turns them into user-visible messages.

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod app;
