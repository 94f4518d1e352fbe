//! Desktop App Module
//!
//! The native Workio desktop application: authentication forms, session
//! persistence and the HTTP plumbing behind them.
//!
//! # Module Structure
//!
//! ```text
//! app/
//! ├── mod.rs        - Module exports
//! ├── main.rs       - Application entry point (binary)
//! ├── config.rs     - Configuration (API base URL)
//! ├── session.rs    - Session store (token/role persistence)
//! ├── http.rs       - HTTP pipeline (bearer attach, 401 handling)
//! ├── api.rs        - Auth API client (endpoints, normalization)
//! ├── repository.rs - Login orchestration
//! ├── viewmodel.rs  - Login state machine
//! ├── forms.rs      - Form schemas and validation
//! ├── route.rs      - Client routes
//! ├── state.rs      - UI state and async bridging
//! ├── views/        - egui views
//! └── theme/        - Color palette
//! ```

pub mod api;
pub mod config;
pub mod forms;
pub mod http;
pub mod repository;
pub mod route;
pub mod session;
pub mod state;
pub mod theme;
pub mod viewmodel;
pub mod views;

// Re-export commonly used types
pub use api::AuthApiClient;
pub use config::Config;
pub use http::HttpClient;
pub use repository::AuthRepository;
pub use route::AppView;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use state::AppState;
pub use viewmodel::{LoginOutcome, LoginPhase, LoginViewModel};
