//! End-to-end authentication flow tests against a mock backend.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use workio::app::viewmodel::{LoginOutcome, LoginPhase};
use workio::app::{
    AuthApiClient, AuthRepository, Config, FileSessionStore, HttpClient, LoginViewModel,
    MemorySessionStore, SessionStore,
};
use workio::shared::auth::{AuthRole, Credentials};
use workio::shared::error::AuthError;

fn credentials(role: AuthRole) -> Credentials {
    Credentials {
        email: "jamie@example.com".to_string(),
        password: "hunter22".to_string(),
        role,
    }
}

fn repository(server: &MockServer, session: Arc<dyn SessionStore>) -> AuthRepository {
    let http = HttpClient::new(Config::with_base_url(server.uri()), session.clone());
    AuthRepository::new(AuthApiClient::new(http), session)
}

#[tokio::test]
async fn each_role_routes_to_its_own_endpoint() {
    let server = MockServer::start().await;
    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let repo = repository(&server, session);

    for (role, endpoint) in [
        (AuthRole::Admin, "/admin-auth/login"),
        (AuthRole::Recruiter, "/recruiter/auth/login"),
        (AuthRole::Candidate, "/candidate/auth/login"),
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_json(json!({
                "email": "jamie@example.com",
                "password": "hunter22"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "accessToken": format!("token-{}", role.as_str())
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = repo.login(&credentials(role)).await.unwrap();
        assert_eq!(
            result.tokens.access_token,
            format!("token-{}", role.as_str())
        );
    }

    // Mock expectations verify that each login hit exactly its endpoint.
    server.verify().await;
}

#[test]
fn unrecognized_role_string_fails_without_any_network() {
    // Role strings from storage go through AuthRole::parse; anything
    // unsupported is rejected synchronously.
    let err = AuthRole::parse("manager").unwrap_err();
    assert_eq!(err, AuthError::invalid_role("manager"));
    assert_eq!(format!("{}", err), "Invalid role: manager");
}

#[tokio::test]
async fn candidate_login_scenario_persists_token_and_transitions_view_model() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::at_path(dir.path().join("session.json")));
    let repo = repository(&server, session.clone());

    Mock::given(method("POST"))
        .and(path("/candidate/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "accessToken": "abc",
                "user": {
                    "id": "u1",
                    "fullName": "Jamie Tran",
                    "email": "jamie@example.com",
                    "role": "candidate"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut vm = LoginViewModel::new();
    assert_eq!(vm.phase(), LoginPhase::Idle);

    assert!(vm.begin_submit());
    assert_eq!(vm.phase(), LoginPhase::Submitting);

    let result = repo.login(&credentials(AuthRole::Candidate)).await;
    let outcome = vm.complete(result);

    assert_eq!(vm.phase(), LoginPhase::Success);
    match outcome {
        LoginOutcome::Success {
            navigate_to,
            result,
            ..
        } => {
            assert_eq!(navigate_to, "/home");
            assert_eq!(result.user.unwrap().full_name, "Jamie Tran");
        }
        other => panic!("expected success outcome, got {:?}", other),
    }

    assert_eq!(session.access_token().as_deref(), Some("abc"));
    assert_eq!(session.role().as_deref(), Some("candidate"));

    // The token survives a process restart via the session file.
    let reopened = FileSessionStore::at_path(dir.path().join("session.json"));
    assert_eq!(reopened.access_token().as_deref(), Some("abc"));
}

#[tokio::test]
async fn failed_login_surfaces_server_message_and_allows_retry() {
    let server = MockServer::start().await;
    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let repo = repository(&server, session.clone());

    Mock::given(method("POST"))
        .and(path("/candidate/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "Email or password is incorrect."})),
        )
        .mount(&server)
        .await;

    let mut vm = LoginViewModel::new();
    vm.begin_submit();
    let result = repo.login(&credentials(AuthRole::Candidate)).await;
    let outcome = vm.complete(result);

    assert_eq!(vm.phase(), LoginPhase::Failed);
    assert!(!vm.is_loading());
    assert_eq!(
        outcome,
        LoginOutcome::Failed {
            message: "Email or password is incorrect.".to_string()
        }
    );
    assert!(session.access_token().is_none());

    // the form is resubmittable after a failure
    assert!(vm.begin_submit());
}

#[tokio::test]
async fn unauthorized_account_call_clears_persisted_tokens() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let session: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::at_path(dir.path().join("session.json")));
    session.set_tokens(&workio::shared::auth::TokenPair::new(
        "stale",
        Some("stale-refresh".to_string()),
    ));
    session.set_role(AuthRole::Candidate);

    let http = HttpClient::new(Config::with_base_url(server.uri()), session.clone());
    let api = AuthApiClient::new(http);

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/account"))
        .and(header("Authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
        .mount(&server)
        .await;

    let err = api.get_account().await.unwrap_err();
    assert!(err.is_unauthorized());

    // tokens gone, role retained - also in the persisted file
    let reopened = FileSessionStore::at_path(dir.path().join("session.json"));
    assert!(reopened.access_token().is_none());
    assert!(reopened.refresh_token().is_none());
    assert_eq!(reopened.role().as_deref(), Some("candidate"));
}

#[tokio::test]
async fn account_endpoint_without_result_reports_descriptive_error() {
    let server = MockServer::start().await;
    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let http = HttpClient::new(Config::with_base_url(server.uri()), session);
    let api = AuthApiClient::new(http);

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200})))
        .mount(&server)
        .await;

    let err = api.get_account().await.unwrap_err();
    assert_eq!(err.user_message(), "Could not fetch account information");
}
