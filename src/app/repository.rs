//! Auth Repository
//!
//! Orchestrates the API client and the session store: performs the login,
//! persists the resulting tokens and the requested role, and falls back to
//! the account endpoint when the login response omitted the user.

use std::sync::Arc;

use crate::app::api::AuthApiClient;
use crate::app::session::SessionStore;
use crate::shared::auth::{AuthResult, Credentials, TokenPair};
use crate::shared::error::AuthError;

#[derive(Clone)]
pub struct AuthRepository {
    api: AuthApiClient,
    session: Arc<dyn SessionStore>,
}

impl AuthRepository {
    pub fn new(api: AuthApiClient, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Log in, persist the session, and return tokens plus the user profile.
    ///
    /// Login failures propagate unchanged. A missing user triggers a
    /// secondary account fetch whose failure is swallowed: the caller still
    /// receives valid tokens without profile data.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResult, AuthError> {
        let response = self.api.login(credentials).await?;

        let tokens = TokenPair::new(response.access_token, response.refresh_token);

        // Two independent writes; the store is not transactional.
        self.session.set_tokens(&tokens);
        self.session.set_role(credentials.role);

        let user = match response.user {
            Some(user) => Some(user),
            None => match self.api.get_account().await {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::debug!("account fetch after login failed: {}", e);
                    None
                }
            },
        };

        tracing::info!(
            role = credentials.role.as_str(),
            has_user = user.is_some(),
            "login succeeded"
        );
        Ok(AuthResult { tokens, user })
    }
}
