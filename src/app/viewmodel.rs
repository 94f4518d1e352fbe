//! Login View-Model
//!
//! State machine driving a login submission: `Idle -> Submitting ->
//! Success | Failed`, with `is_loading` and `error` as the observable
//! fields. Notifications and navigation are returned as explicit outcome
//! values; the presentation layer decides how and when to surface them.
//! A failed submission returns to a resubmittable state.

use crate::shared::auth::AuthResult;
use crate::shared::error::AuthError;

/// Route the presentation layer navigates to after a successful login
pub const HOME_ROUTE: &str = "/home";

/// Observable phase of the login flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Outcome handed to the presentation layer when a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Tokens stored; show the message, then navigate
    Success {
        message: String,
        navigate_to: &'static str,
        result: AuthResult,
    },
    /// Submission failed; show the message and allow resubmission
    Failed { message: String },
}

/// UI state for the login form
#[derive(Debug, Clone)]
pub struct LoginViewModel {
    phase: LoginPhase,
    error: Option<String>,
}

impl Default for LoginViewModel {
    fn default() -> Self {
        Self {
            phase: LoginPhase::Idle,
            error: None,
        }
    }
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Whether a submission is in flight (or navigation is pending)
    ///
    /// Stays true through `Success` so the submit control remains disabled
    /// until the view unmounts. Advisory only: nothing below the UI enforces
    /// single-flight submissions.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoginPhase::Submitting | LoginPhase::Success)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Transition `Idle`/`Failed` -> `Submitting`, clearing any prior error.
    ///
    /// Returns false if a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = LoginPhase::Submitting;
        self.error = None;
        true
    }

    /// Settle the in-flight submission with the repository's result
    pub fn complete(&mut self, result: Result<AuthResult, AuthError>) -> LoginOutcome {
        match result {
            Ok(result) => {
                self.phase = LoginPhase::Success;
                LoginOutcome::Success {
                    message: "Signed in successfully!".to_string(),
                    navigate_to: HOME_ROUTE,
                    result,
                }
            }
            Err(e) => {
                let message = e.user_message();
                self.phase = LoginPhase::Failed;
                self.error = Some(message.clone());
                LoginOutcome::Failed { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::auth::TokenPair;

    fn ok_result() -> Result<AuthResult, AuthError> {
        Ok(AuthResult {
            tokens: TokenPair::new("abc", None),
            user: None,
        })
    }

    #[test]
    fn test_initial_state_is_idle() {
        let vm = LoginViewModel::new();
        assert_eq!(vm.phase(), LoginPhase::Idle);
        assert!(!vm.is_loading());
        assert!(vm.error().is_none());
    }

    #[test]
    fn test_begin_submit_transitions_to_submitting() {
        let mut vm = LoginViewModel::new();
        assert!(vm.begin_submit());
        assert_eq!(vm.phase(), LoginPhase::Submitting);
        assert!(vm.is_loading());
    }

    #[test]
    fn test_begin_submit_guards_double_submission() {
        let mut vm = LoginViewModel::new();
        assert!(vm.begin_submit());
        assert!(!vm.begin_submit());
    }

    #[test]
    fn test_success_schedules_navigation_and_keeps_loading() {
        let mut vm = LoginViewModel::new();
        vm.begin_submit();
        let outcome = vm.complete(ok_result());

        assert_eq!(vm.phase(), LoginPhase::Success);
        assert!(vm.is_loading());
        match outcome {
            LoginOutcome::Success { navigate_to, .. } => assert_eq!(navigate_to, "/home"),
            other => panic!("Expected Success, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_sets_error_and_allows_resubmit() {
        let mut vm = LoginViewModel::new();
        vm.begin_submit();
        let outcome = vm.complete(Err(AuthError::rejected(400, "Email or password is incorrect.")));

        assert_eq!(vm.phase(), LoginPhase::Failed);
        assert!(!vm.is_loading());
        assert_eq!(vm.error(), Some("Email or password is incorrect."));
        assert_eq!(
            outcome,
            LoginOutcome::Failed {
                message: "Email or password is incorrect.".to_string()
            }
        );

        // a new submission is allowed and clears the error
        assert!(vm.begin_submit());
        assert!(vm.error().is_none());
    }
}
