/**
 * Auth Data Model
 *
 * Defines the shared data types for the authentication flow: roles,
 * credentials, token pairs, user profiles and the backend response envelope.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::AuthError;

/// Role discriminator selecting the backend login endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthRole {
    Admin,
    Recruiter,
    Candidate,
}

impl AuthRole {
    /// All supported roles, in the order the login form presents them
    pub const ALL: [AuthRole; 3] = [AuthRole::Admin, AuthRole::Recruiter, AuthRole::Candidate];

    /// Storage/display string for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthRole::Admin => "admin",
            AuthRole::Recruiter => "recruiter",
            AuthRole::Candidate => "candidate",
        }
    }

    /// Parse a stored role string; anything else is an invalid-role error
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        match value {
            "admin" => Ok(AuthRole::Admin),
            "recruiter" => Ok(AuthRole::Recruiter),
            "candidate" => Ok(AuthRole::Candidate),
            other => Err(AuthError::invalid_role(other)),
        }
    }

    /// Human-readable label for the role selector
    pub fn label(&self) -> &'static str {
        match self {
            AuthRole::Admin => "Administrator",
            AuthRole::Recruiter => "Recruiter",
            AuthRole::Candidate => "Candidate",
        }
    }
}

/// Login credentials, constructed per submission and never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub role: AuthRole,
}

/// Request body sent to the login endpoints (role only selects the URL)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Access/refresh token pair owned by the session store
///
/// The refresh token slot is carried for a future refresh flow; no part of
/// the current client exercises it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    /// Build a pair from a login response, defaulting a missing refresh token
    /// to the empty string
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.unwrap_or_default(),
        }
    }
}

/// Authenticated user profile
///
/// May be absent from a login response; the repository then fetches it from
/// the account endpoint. Held in memory only, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: String,
}

/// Normalized login response: tokens plus the user when the server sent one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: Option<AuthUser>,
}

/// Combined result handed back to the view-model after a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub tokens: TokenPair,
    pub user: Option<AuthUser>,
}

/// Standard `{statusCode, message, result}` envelope used by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(rename = "statusCode", default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in AuthRole::ALL {
            assert_eq!(AuthRole::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        let err = AuthRole::parse("manager").unwrap_err();
        assert_eq!(err, AuthError::invalid_role("manager"));
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&AuthRole::Recruiter).unwrap();
        assert_eq!(json, "\"recruiter\"");
        let role: AuthRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, AuthRole::Admin);
    }

    #[test]
    fn test_token_pair_defaults_missing_refresh() {
        let pair = TokenPair::new("abc", None);
        assert_eq!(pair.access_token, "abc");
        assert_eq!(pair.refresh_token, "");

        let pair = TokenPair::new("abc", Some("def".to_string()));
        assert_eq!(pair.refresh_token, "def");
    }

    #[test]
    fn test_auth_user_deserializes_camel_case() {
        let user: AuthUser = serde_json::from_str(
            r#"{"id":"u1","fullName":"Jamie Tran","email":"jamie@example.com","role":"candidate"}"#,
        )
        .unwrap();
        assert_eq!(user.full_name, "Jamie Tran");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let env: ApiEnvelope<AuthUser> = serde_json::from_str("{}").unwrap();
        assert!(env.result.is_none());
        assert!(env.message.is_none());
    }
}
