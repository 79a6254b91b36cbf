//! GoTrue authentication client for the MBet-Adera client core
//!
//! This crate talks to the hosted identity service: password sign-in and
//! sign-up, sign-out, token refresh, and the session change events the
//! auth provider listens to.

use chrono::Utc;
use log::{debug, info, trace, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::broadcast;

/// Capacity of the session change channel. Slow listeners see `Lagged`.
const EVENT_CAPACITY: usize = 32;

/// Errors returned by the identity service client
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing session")]
    MissingSession,

    #[error("Admin client not initialized")]
    AdminUnavailable,
}

impl AuthError {
    /// The message as reported by the provider, without any prefix.
    pub fn message(&self) -> String {
        match self {
            AuthError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Identity record issued by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub app_metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub user_metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Credential bundle for an authenticated identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    /// Unix timestamp (seconds). Filled in on receipt when the provider omits it.
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    fn stamped(mut self) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = Some(Utc::now().timestamp() + self.expires_in);
        }
        self
    }

    /// Check if the access token has expired
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now().timestamp() >= expires_at,
            None => false,
        }
    }
}

/// Result of a sign-up call.
///
/// `session` is `None` when the project requires email confirmation.
#[derive(Debug, Clone)]
pub struct SignUpResponse {
    pub user: Option<User>,
    pub session: Option<Session>,
}

/// Kind of session change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// A session change pushed to every listener
#[derive(Debug, Clone)]
pub struct AuthStateChange {
    pub event: AuthChangeEvent,
    pub session: Option<Session>,
}

/// Client options
#[derive(Debug, Clone)]
pub struct AuthOptions {
    pub auto_refresh_token: bool,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            auto_refresh_token: true,
        }
    }
}

/// Reduce an error body to the provider's own message.
///
/// GoTrue uses `msg` or `error_description`, PostgREST-style bodies use
/// `message`; anything else is returned as-is.
pub fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["msg", "error_description", "message", "error"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.trim().to_string()
}

async fn api_error(response: reqwest::Response) -> AuthError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AuthError::ApiError {
        status,
        message: extract_error_message(&body),
    }
}

/// Auth client
pub struct Auth {
    url: String,
    key: String,
    http_client: Client,
    options: AuthOptions,
    current_session: Arc<RwLock<Option<Session>>>,
    events: broadcast::Sender<AuthStateChange>,
    admin: Option<AdminAuth>,
}

/// Service-role client for user management
pub struct AdminAuth {
    url: String,
    service_role_key: String,
    http_client: Client,
}

impl AdminAuth {
    pub fn new(url: &str, service_role_key: &str, http_client: Client) -> Self {
        Self {
            url: url.to_string(),
            service_role_key: service_role_key.to_string(),
            http_client,
        }
    }

    /// Delete a user by id
    pub async fn delete_user(&self, user_id: &str) -> Result<(), AuthError> {
        let url = format!("{}/auth/v1/admin/users/{}", self.url, user_id);
        debug!("DELETE {}", url);

        let response = self
            .http_client
            .delete(&url)
            .header("apikey", &self.service_role_key)
            .header(
                "Authorization",
                format!("Bearer {}", &self.service_role_key),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        info!("Deleted user {}", user_id);
        Ok(())
    }
}

impl Auth {
    /// Create a new Auth client
    pub fn new(url: &str, key: &str, http_client: Client, options: AuthOptions) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            url: url.trim_end_matches('/').to_string(),
            key: key.to_string(),
            http_client,
            options,
            current_session: Arc::new(RwLock::new(None)),
            events,
            admin: None,
        }
    }

    /// Enable the admin API. Only for trusted, server-side processes.
    pub fn with_service_role_key(mut self, service_role_key: &str) -> Self {
        self.admin = Some(AdminAuth::new(
            &self.url,
            service_role_key,
            self.http_client.clone(),
        ));
        self
    }

    pub fn admin(&self) -> Option<&AdminAuth> {
        self.admin.as_ref()
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.url, path)
    }

    /// Register a new listener for session changes
    pub fn on_auth_state_change(&self) -> broadcast::Receiver<AuthStateChange> {
        self.events.subscribe()
    }

    fn emit(&self, event: AuthChangeEvent, session: Option<Session>) {
        trace!("Emitting {:?}", event);
        // No receivers is fine; nobody is listening yet.
        if self.events.send(AuthStateChange { event, session }).is_err() {
            trace!("No listeners for {:?}", event);
        }
    }

    fn store_session(&self, session: Option<Session>) {
        let mut guard = self
            .current_session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = session;
    }

    fn stored_session(&self) -> Option<Session> {
        self.current_session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Restore a session obtained elsewhere
    pub fn set_session(&self, session: Session) {
        let session = session.stamped();
        self.store_session(Some(session.clone()));
        self.emit(AuthChangeEvent::SignedIn, Some(session));
    }

    /// Drop the stored session without contacting the server, if it belongs
    /// to `user_id`. Returns whether a session was dropped.
    pub fn forget_session_of(&self, user_id: &str) -> bool {
        match self.stored_session() {
            Some(session) if session.user.id == user_id => {
                self.store_session(None);
                self.emit(AuthChangeEvent::SignedOut, None);
                true
            }
            _ => false,
        }
    }

    /// Current session, refreshed first when expired and auto refresh is on
    pub async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        match self.stored_session() {
            Some(session) if session.is_expired() && self.options.auto_refresh_token => {
                debug!("Stored session expired, refreshing");
                self.refresh_session().await.map(Some)
            }
            other => Ok(other),
        }
    }

    /// Register a new identity
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, AuthError> {
        let url = self.auth_url("/signup");
        debug!("POST {}", url);

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body = response.json::<serde_json::Value>().await?;
        let result = parse_sign_up(body)?;

        if let Some(session) = &result.session {
            self.store_session(Some(session.clone()));
            self.emit(AuthChangeEvent::SignedIn, Some(session.clone()));
        }

        Ok(result)
    }

    /// Sign in with email and password
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let url = self.auth_url("/token?grant_type=password");
        debug!("POST {}", url);

        let payload = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let session = response.json::<Session>().await?.stamped();

        self.store_session(Some(session.clone()));
        self.emit(AuthChangeEvent::SignedIn, Some(session.clone()));

        Ok(session)
    }

    /// Fetch the identity behind the current session
    pub async fn get_user(&self) -> Result<User, AuthError> {
        let session = self.stored_session().ok_or(AuthError::MissingSession)?;

        let url = self.auth_url("/user");
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", session.access_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(response.json::<User>().await?)
    }

    /// Exchange the refresh token for a new session
    pub async fn refresh_session(&self) -> Result<Session, AuthError> {
        let session = self.stored_session().ok_or(AuthError::MissingSession)?;

        let url = self.auth_url("/token?grant_type=refresh_token");
        debug!("POST {}", url);

        let payload = serde_json::json!({
            "refresh_token": session.refresh_token,
        });

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let new_session = response.json::<Session>().await?.stamped();

        self.store_session(Some(new_session.clone()));
        self.emit(AuthChangeEvent::TokenRefreshed, Some(new_session.clone()));

        Ok(new_session)
    }

    /// Sign out.
    ///
    /// The local session is cleared and `SignedOut` emitted on every path,
    /// including a failed revoke; that failure is still returned.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let result = match self.stored_session() {
            Some(session) => self.revoke(&session).await,
            None => {
                warn!("sign_out called without a session");
                Ok(())
            }
        };

        self.store_session(None);
        self.emit(AuthChangeEvent::SignedOut, None);

        result
    }

    /// Revoke the session server-side. A token the server no longer
    /// recognizes (401, 403, 404) counts as revoked.
    async fn revoke(&self, session: &Session) -> Result<(), AuthError> {
        let url = self.auth_url("/logout");
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", session.access_token))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if matches!(status.as_u16(), 401 | 403 | 404) {
            debug!("Logout returned {}, token already invalid", status);
            return Ok(());
        }

        Err(api_error(response).await)
    }
}

fn parse_sign_up(body: serde_json::Value) -> Result<SignUpResponse, AuthError> {
    if body.get("access_token").is_some() {
        let session = serde_json::from_value::<Session>(body)?.stamped();
        return Ok(SignUpResponse {
            user: Some(session.user.clone()),
            session: Some(session),
        });
    }

    // Confirmation pending: either a bare user or `{ "user": ..., "session": null }`.
    let user = match body.get("user") {
        Some(user) if user.is_object() => serde_json::from_value::<User>(user.clone())?,
        Some(_) => return Ok(SignUpResponse { user: None, session: None }),
        None => serde_json::from_value::<User>(body)?,
    };

    Ok(SignUpResponse {
        user: Some(user),
        session: None,
    })
}
