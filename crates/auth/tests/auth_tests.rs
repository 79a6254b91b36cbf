use mbet_adera_auth::{Auth, AuthChangeEvent, AuthError, AuthOptions, Session};
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_body(access_token: &str, refresh_token: &str) -> serde_json::Value {
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": refresh_token,
        "user": {
            "id": "test_user_id",
            "email": "test@example.com",
            "role": "authenticated"
        }
    })
}

fn client(server: &MockServer) -> Auth {
    Auth::new(&server.uri(), "test_anon_key", Client::new(), AuthOptions::default())
}

#[tokio::test]
async fn test_sign_in_with_password() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "test_anon_key"))
        .and(body_json(json!({ "email": "test@example.com", "password": "password123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("test_access_token", "test_refresh_token")))
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);
    let mut events = auth.on_auth_state_change();

    let session = auth
        .sign_in_with_password("test@example.com", "password123")
        .await
        .unwrap();

    assert_eq!(session.access_token, "test_access_token");
    assert_eq!(session.user.id, "test_user_id");
    assert_eq!(session.user.email, Some("test@example.com".to_string()));
    assert!(session.expires_at.is_some());

    let change = events.recv().await.unwrap();
    assert_eq!(change.event, AuthChangeEvent::SignedIn);
    assert_eq!(change.session.unwrap().access_token, "test_access_token");

    let stored = auth.get_session().await.unwrap().unwrap();
    assert_eq!(stored.access_token, "test_access_token");
}

#[tokio::test]
async fn test_sign_in_reports_provider_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);

    let err = auth
        .sign_in_with_password("test@example.com", "wrong")
        .await
        .unwrap_err();

    match &err {
        AuthError::ApiError { status, message } => {
            assert_eq!(*status, 400);
            assert_eq!(message, "Invalid login credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.message(), "Invalid login credentials");
    assert!(auth.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_sign_up_with_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("test_access_token", "test_refresh_token")))
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);
    let mut events = auth.on_auth_state_change();

    let result = auth.sign_up("test@example.com", "password123").await.unwrap();

    assert_eq!(result.user.unwrap().id, "test_user_id");
    assert_eq!(result.session.unwrap().access_token, "test_access_token");
    assert_eq!(events.recv().await.unwrap().event, AuthChangeEvent::SignedIn);
}

#[tokio::test]
async fn test_sign_up_pending_confirmation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pending_user_id",
            "email": "test@example.com",
            "confirmation_sent_at": "2024-01-01T00:00:00Z"
        })))
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);

    let result = auth.sign_up("test@example.com", "password123").await.unwrap();

    assert_eq!(result.user.unwrap().id, "pending_user_id");
    assert!(result.session.is_none());
    assert!(auth.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_sign_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("test_access_token", "test_refresh_token")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("Authorization", "Bearer test_access_token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);
    auth.sign_in_with_password("test@example.com", "password123")
        .await
        .unwrap();

    let mut events = auth.on_auth_state_change();
    auth.sign_out().await.unwrap();

    let change = events.recv().await.unwrap();
    assert_eq!(change.event, AuthChangeEvent::SignedOut);
    assert!(change.session.is_none());
    assert!(auth.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_sign_out_with_rejected_token_still_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("revoked_token", "test_refresh_token")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "msg": "invalid JWT" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);
    auth.sign_in_with_password("test@example.com", "password123")
        .await
        .unwrap();

    let mut events = auth.on_auth_state_change();
    auth.sign_out().await.unwrap();

    assert_eq!(events.recv().await.unwrap().event, AuthChangeEvent::SignedOut);
    assert!(auth.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_sign_out_server_error_is_returned_after_clearing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("test_access_token", "test_refresh_token")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "msg": "database unavailable" })))
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);
    auth.sign_in_with_password("test@example.com", "password123")
        .await
        .unwrap();

    let mut events = auth.on_auth_state_change();
    match auth.sign_out().await {
        Err(AuthError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }

    assert_eq!(events.recv().await.unwrap().event, AuthChangeEvent::SignedOut);
    assert!(auth.get_session().await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_session_refreshes_expired_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({ "refresh_token": "old_refresh_token" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("new_access_token", "new_refresh_token")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut expired = session_body("old_access_token", "old_refresh_token");
    expired["expires_at"] = json!(1);
    let expired: Session = serde_json::from_value(expired).unwrap();

    let auth = client(&mock_server);
    auth.set_session(expired);
    let mut events = auth.on_auth_state_change();

    let session = auth.get_session().await.unwrap().unwrap();

    assert_eq!(session.access_token, "new_access_token");
    assert!(!session.is_expired());
    assert_eq!(events.recv().await.unwrap().event, AuthChangeEvent::TokenRefreshed);

    let again = auth.get_session().await.unwrap().unwrap();
    assert_eq!(again.access_token, "new_access_token");
}

#[tokio::test]
async fn test_refresh_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("old_access_token", "old_refresh_token")))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(json!({ "refresh_token": "old_refresh_token" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("new_access_token", "new_refresh_token")))
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);
    auth.sign_in_with_password("test@example.com", "password123")
        .await
        .unwrap();

    let mut events = auth.on_auth_state_change();
    let session = auth.refresh_session().await.unwrap();

    assert_eq!(session.access_token, "new_access_token");
    assert_eq!(session.refresh_token, "new_refresh_token");
    assert_eq!(events.recv().await.unwrap().event, AuthChangeEvent::TokenRefreshed);
}

#[tokio::test]
async fn test_admin_delete_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/auth/v1/admin/users/orphan_id"))
        .and(header("Authorization", "Bearer service_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server).with_service_role_key("service_key");

    auth.admin().unwrap().delete_user("orphan_id").await.unwrap();
}

#[tokio::test]
async fn test_get_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body("test_access_token", "test_refresh_token")))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("Authorization", "Bearer test_access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "test_user_id",
            "email": "test@example.com",
            "user_metadata": { "full_name": "Abebe" }
        })))
        .mount(&mock_server)
        .await;

    let auth = client(&mock_server);

    match auth.get_user().await {
        Err(AuthError::MissingSession) => {}
        other => panic!("expected MissingSession, got {other:?}"),
    }

    auth.sign_in_with_password("test@example.com", "password123")
        .await
        .unwrap();
    let user = auth.get_user().await.unwrap();

    assert_eq!(user.id, "test_user_id");
    assert_eq!(user.user_metadata["full_name"], "Abebe");
}
