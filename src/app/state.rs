//! App State
//!
//! This module contains the state management for the desktop UI: form
//! inputs, the login view-model, pending async operation receivers and
//! deferred navigation.
//!
//! Network work never runs on the UI thread. A submission spawns a worker
//! thread that builds a tokio runtime, drives the repository and delivers
//! the result through an mpsc channel polled once per frame.

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::app::forms::{FieldErrors, ForgotPasswordForm, LoginForm, RegisterForm};
use crate::app::http::HttpClient;
use crate::app::api::AuthApiClient;
use crate::app::repository::AuthRepository;
use crate::app::route::AppView;
use crate::app::session::{FileSessionStore, SessionStore};
use crate::app::viewmodel::{LoginOutcome, LoginViewModel};
use crate::shared::auth::{AuthResult, AuthUser};
use crate::shared::error::AuthError;

/// How long the success notice stays visible before navigating away
const SUCCESS_NAV_DELAY: Duration = Duration::from_millis(800);
/// Pacing for the simulated register/forgot-password demo flows
const SIMULATED_SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// Delay before redirecting to the login form after a simulated registration
const REGISTER_REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub type LoginResult = Result<AuthResult, AuthError>;

/// Kind of transient notice shown in the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-visible notification
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// The main state for the desktop UI
pub struct AppState {
    pub session: Arc<dyn SessionStore>,
    repository: AuthRepository,

    /// Currently rendered view
    pub current_view: AppView,
    /// Deferred navigation target and the instant it fires
    navigate_at: Option<(Instant, AppView)>,

    /// Login form inputs and inline field errors
    pub login_form: LoginForm,
    pub login_errors: FieldErrors,
    pub login_vm: LoginViewModel,
    /// Pending login running on a worker thread
    pending_login: Option<Receiver<LoginResult>>,

    /// Register form (simulated submission)
    pub register_form: RegisterForm,
    pub register_errors: FieldErrors,
    register_submitted_at: Option<Instant>,

    /// Forgot-password form (simulated submission)
    pub forgot_form: ForgotPasswordForm,
    pub forgot_errors: FieldErrors,
    forgot_submitted_at: Option<Instant>,
    pub forgot_sent: bool,

    /// Profile of the signed-in user, held in memory for this session only
    pub current_user: Option<AuthUser>,
    /// Transient notice shown to the user
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new());
        Self::with_parts(config, session)
    }

    /// Build state over an explicit config and store (tests inject an
    /// in-memory store here)
    pub fn with_parts(config: Config, session: Arc<dyn SessionStore>) -> Self {
        let http = HttpClient::new(config, session.clone());
        let repository = AuthRepository::new(AuthApiClient::new(http), session.clone());

        // A persisted access token means the caller is treated as
        // authenticated; land on home, otherwise on the login form.
        let current_view = if session.access_token().is_some() {
            AppView::from_route("/")
        } else {
            AppView::Login
        };

        let mut login_form = LoginForm::default();
        if let Some(role) = session.role().and_then(|r| crate::shared::auth::AuthRole::parse(&r).ok()) {
            login_form.role = role;
        }

        Self {
            session,
            repository,
            current_view,
            navigate_at: None,
            login_form,
            login_errors: FieldErrors::new(),
            login_vm: LoginViewModel::new(),
            pending_login: None,
            register_form: RegisterForm::default(),
            register_errors: FieldErrors::new(),
            register_submitted_at: None,
            forgot_form: ForgotPasswordForm::default(),
            forgot_errors: FieldErrors::new(),
            forgot_submitted_at: None,
            forgot_sent: false,
            current_user: None,
            notice: None,
        }
    }

    /// Navigate immediately to a view
    pub fn navigate(&mut self, view: AppView) {
        self.current_view = view;
        self.navigate_at = None;
        self.notice = None;
    }

    /// Whether the register demo submission is in flight
    pub fn register_loading(&self) -> bool {
        self.register_submitted_at.is_some()
    }

    /// Whether the forgot-password demo submission is in flight
    pub fn forgot_loading(&self) -> bool {
        self.forgot_submitted_at.is_some()
    }

    /// Validate the login form and start a submission on a worker thread
    pub fn handle_login(&mut self) {
        self.login_errors.clear();

        let credentials = match self.login_form.validate() {
            Ok(credentials) => credentials,
            Err(errors) => {
                self.login_errors = errors;
                return;
            }
        };

        if !self.login_vm.begin_submit() {
            return;
        }

        let repository = self.repository.clone();
        let (tx, rx) = mpsc::channel();
        self.pending_login = Some(rx);

        thread::spawn(move || {
            let result = match Runtime::new() {
                Ok(rt) => rt.block_on(repository.login(&credentials)),
                Err(e) => Err(AuthError::network(format!("Failed to create runtime: {}", e))),
            };
            // The receiver may be gone if the app shut down mid-request.
            let _ = tx.send(result);
        });
    }

    /// Validate the register form and start the simulated submission
    pub fn handle_register(&mut self) {
        self.register_errors.clear();
        if let Err(errors) = self.register_form.validate() {
            self.register_errors = errors;
            return;
        }
        if self.register_submitted_at.is_none() {
            self.register_submitted_at = Some(Instant::now());
        }
    }

    /// Validate the forgot-password form and start the simulated submission
    pub fn handle_forgot_password(&mut self) {
        self.forgot_errors.clear();
        if let Err(errors) = self.forgot_form.validate() {
            self.forgot_errors = errors;
            return;
        }
        if self.forgot_submitted_at.is_none() {
            self.forgot_sent = false;
            self.forgot_submitted_at = Some(Instant::now());
        }
    }

    /// Poll pending operations and timers; called once per frame
    pub fn process_frame(&mut self) {
        self.check_login_result();
        self.process_simulated_flows();

        if let Some((at, view)) = self.navigate_at {
            if Instant::now() >= at {
                self.navigate(view);
            }
        }
    }

    /// Apply a settled login submission to the view-model and schedule
    /// navigation
    fn check_login_result(&mut self) {
        let Some(rx) = &self.pending_login else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => {
                // Worker died without reporting; treat it as a failed call.
                Err(AuthError::network("login worker terminated unexpectedly"))
            }
        };
        self.pending_login = None;

        match self.login_vm.complete(result) {
            LoginOutcome::Success {
                message,
                navigate_to,
                result,
            } => {
                self.current_user = result.user;
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message,
                });
                // Keep the success notice visible before the view unmounts.
                self.navigate_at = Some((
                    Instant::now() + SUCCESS_NAV_DELAY,
                    AppView::from_route(navigate_to),
                ));
            }
            LoginOutcome::Failed { message } => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    message,
                });
            }
        }
    }

    /// Advance the fixed-duration register/forgot demo flows
    fn process_simulated_flows(&mut self) {
        if let Some(at) = self.register_submitted_at {
            if at.elapsed() >= SIMULATED_SUBMIT_DELAY {
                self.register_submitted_at = None;
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message: "Account created! Redirecting to sign in...".to_string(),
                });
                self.navigate_at = Some((Instant::now() + REGISTER_REDIRECT_DELAY, AppView::Login));
            }
        }

        if let Some(at) = self.forgot_submitted_at {
            if at.elapsed() >= SIMULATED_SUBMIT_DELAY {
                self.forgot_submitted_at = None;
                self.forgot_sent = true;
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message: "If an account exists for that email, a reset link is on its way."
                        .to_string(),
                });
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
