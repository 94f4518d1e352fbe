//! Auth API Client
//!
//! Maps a login request to one of three role-specific backend endpoints and
//! normalizes the heterogeneous response payload shapes the backends emit
//! into a single token/user structure.
//!
//! Normalization is table-driven: the access and refresh tokens may appear
//! under six key paths each and the user under three keys, all tried in a
//! fixed priority order with the first present value winning. New shapes are
//! additions to a table, not new branches.

use serde_json::Value;

use crate::app::http::HttpClient;
use crate::shared::auth::{
    ApiEnvelope, AuthResponse, AuthRole, AuthUser, Credentials, LoginBody,
};
use crate::shared::error::AuthError;

/// Fallback when the server gave no message and no token was found
const INVALID_RESPONSE_MESSAGE: &str = "Invalid server response";
/// Fallback when the account endpoint returned no result
const ACCOUNT_UNAVAILABLE_MESSAGE: &str = "Could not fetch account information";

/// Login endpoint for each role, in `AuthRole::ALL` order
const LOGIN_ENDPOINTS: [(AuthRole, &str); 3] = [
    (AuthRole::Admin, "/admin-auth/login"),
    (AuthRole::Recruiter, "/recruiter/auth/login"),
    (AuthRole::Candidate, "/candidate/auth/login"),
];

/// Access-token key paths, highest priority first
const ACCESS_TOKEN_PATHS: [&[&str]; 6] = [
    &["accessToken"],
    &["access_token"],
    &["token", "accessToken"],
    &["token", "access_token"],
    &["tokens", "accessToken"],
    &["tokens", "access_token"],
];

/// Refresh-token key paths, same shape as the access token paths
const REFRESH_TOKEN_PATHS: [&[&str]; 6] = [
    &["refreshToken"],
    &["refresh_token"],
    &["token", "refreshToken"],
    &["token", "refresh_token"],
    &["tokens", "refreshToken"],
    &["tokens", "refresh_token"],
];

/// Keys the user object may appear under
const USER_KEYS: [&str; 3] = ["user", "account", "profile"];

/// Client for the authentication endpoints
#[derive(Clone)]
pub struct AuthApiClient {
    http: HttpClient,
}

impl AuthApiClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The login endpoint path for a role
    pub fn login_endpoint(role: AuthRole) -> &'static str {
        LOGIN_ENDPOINTS
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, path)| *path)
            .unwrap_or_else(|| unreachable!("every role has an endpoint"))
    }

    /// Log in with the given credentials
    ///
    /// The role selects the endpoint and is not sent in the body. The
    /// response is normalized; if no access token is found under any known
    /// path the call fails with the server's message field when present.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        let endpoint = Self::login_endpoint(credentials.role);
        let body = LoginBody {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };

        tracing::debug!(role = credentials.role.as_str(), endpoint, "logging in");
        let raw = self.http.post_json(endpoint, &body).await?;
        normalize_login_response(&raw)
    }

    /// Fetch the current account profile (requires a stored access token)
    pub async fn get_account(&self) -> Result<AuthUser, AuthError> {
        let raw = self.http.get_json("/api/v1/auth/account").await?;
        let envelope: ApiEnvelope<AuthUser> = serde_json::from_value(raw)?;
        envelope.result.ok_or_else(|| {
            AuthError::invalid_response(
                envelope
                    .message
                    .unwrap_or_else(|| ACCOUNT_UNAVAILABLE_MESSAGE.to_string()),
            )
        })
    }
}

/// Normalize a raw login response into tokens plus an optional user
pub fn normalize_login_response(raw: &Value) -> Result<AuthResponse, AuthError> {
    // The payload may or may not be wrapped in a `result` envelope.
    let body = match raw.get("result") {
        Some(result) if !result.is_null() => result,
        _ => raw,
    };

    let access_token = first_string(body, &ACCESS_TOKEN_PATHS);
    let refresh_token = first_string(body, &REFRESH_TOKEN_PATHS);

    let Some(access_token) = access_token else {
        let server_message = raw
            .get("message")
            .or_else(|| body.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(AuthError::invalid_response(
            server_message.unwrap_or_else(|| INVALID_RESPONSE_MESSAGE.to_string()),
        ));
    };

    Ok(AuthResponse {
        access_token,
        refresh_token,
        user: extract_user(body),
    })
}

/// First non-empty string found under the given key paths
fn first_string(body: &Value, paths: &[&[&str]]) -> Option<String> {
    paths.iter().find_map(|path| {
        let mut current = body;
        for key in *path {
            current = current.get(key)?;
        }
        current
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// First user-shaped object under the known keys
///
/// A payload that is present but does not deserialize as a user is treated
/// as absent; the repository then falls back to the account endpoint.
fn extract_user(body: &Value) -> Option<AuthUser> {
    let value = USER_KEYS
        .iter()
        .find_map(|key| body.get(*key).filter(|v| !v.is_null()))?;
    match serde_json::from_value::<AuthUser>(value.clone()) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("login response user payload not usable: {}", e);
            None
        }
    }
}
