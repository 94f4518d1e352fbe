//! HTTP Client
//!
//! A single configured request/response pipeline wrapping `reqwest::Client`
//! with the API base URL. Every request is sent as JSON; if the session
//! store holds an access token it is attached as a bearer Authorization
//! header. On a 401 response the pipeline clears the stored tokens before
//! rejecting the call, independent of which request triggered it.
//!
//! Policy: a 401 clears the access and refresh tokens but retains the stored
//! role, so a re-login form can preselect it. No retry, no request queueing,
//! no backoff.

use std::sync::Arc;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::app::config::Config;
use crate::app::session::SessionStore;
use crate::shared::error::AuthError;

/// Request/response pipeline shared by all API clients
#[derive(Clone)]
pub struct HttpClient {
    config: Config,
    client: Client,
    session: Arc<dyn SessionStore>,
}

impl HttpClient {
    pub fn new(config: Config, session: Arc<dyn SessionStore>) -> Self {
        Self {
            config,
            client: Client::new(),
            session,
        }
    }

    /// The session store this pipeline reads tokens from
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// POST a JSON body and return the parsed response body
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, AuthError> {
        let request = self
            .client
            .post(self.config.api_url(path))
            .header("Content-Type", "application/json")
            .json(body);
        self.execute(request).await
    }

    /// GET and return the parsed response body
    pub async fn get_json(&self, path: &str) -> Result<Value, AuthError> {
        let request = self
            .client
            .get(self.config.api_url(path))
            .header("Content-Type", "application/json");
        self.execute(request).await
    }

    /// Attach the bearer token, send, and apply the response policy
    async fn execute(&self, mut request: RequestBuilder) -> Result<Value, AuthError> {
        if let Some(token) = self.session.access_token() {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                tracing::debug!("authentication rejected, clearing stored tokens");
                self.session.clear_tokens();
            }
            let message = Self::error_message(response, status).await;
            return Err(AuthError::rejected(status.as_u16(), message));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AuthError::invalid_response(format!("Failed to parse response: {}", e)))
    }

    /// Best-effort extraction of the server's message field from an error body
    async fn error_message(response: Response, status: StatusCode) -> String {
        let fallback = || {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        };
        match response.json::<Value>().await {
            Ok(body) => body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(fallback),
            Err(_) => fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::MemorySessionStore;
    use crate::shared::auth::TokenPair;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> (HttpClient, Arc<MemorySessionStore>) {
        let session = Arc::new(MemorySessionStore::new());
        let client = HttpClient::new(
            Config::with_base_url(server.uri()),
            session.clone() as Arc<dyn SessionStore>,
        );
        (client, session)
    }

    #[tokio::test]
    async fn test_bearer_header_attached_when_token_present() {
        let server = MockServer::start().await;
        let (client, session) = client_for(&server);
        session.set_tokens(&TokenPair {
            access_token: "abc".to_string(),
            refresh_token: String::new(),
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/auth/account"))
            .and(header("Authorization", "Bearer abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
            .expect(1)
            .mount(&server)
            .await;

        client.get_json("/api/v1/auth/account").await.unwrap();
    }

    #[tokio::test]
    async fn test_unauthorized_clears_tokens_but_keeps_role() {
        let server = MockServer::start().await;
        let (client, session) = client_for(&server);
        session.set_tokens(&TokenPair {
            access_token: "stale".to_string(),
            refresh_token: "stale-refresh".to_string(),
        });
        session.set_role(crate::shared::auth::AuthRole::Recruiter);

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})),
            )
            .mount(&server)
            .await;

        let err = client.get_json("/api/v1/auth/account").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Token expired");
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert_eq!(session.role().as_deref(), Some("recruiter"));
    }

    #[tokio::test]
    async fn test_non_auth_failure_leaves_tokens_alone() {
        let server = MockServer::start().await;
        let (client, session) = client_for(&server);
        session.set_tokens(&TokenPair {
            access_token: "abc".to_string(),
            refresh_token: String::new(),
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client
            .post_json("/candidate/auth/login", &json!({}))
            .await
            .unwrap_err();
        match err {
            AuthError::Rejected { status: 500, .. } => {}
            other => panic!("Expected Rejected, got {:?}", other),
        }
        assert_eq!(session.access_token().as_deref(), Some("abc"));
    }
}
