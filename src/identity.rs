//! Seam between the auth provider and the hosted identity service

use async_trait::async_trait;
use tokio::sync::broadcast;

use mbet_adera_auth::{Auth, AuthStateChange, Session, SignUpResponse};

use crate::error::Error;

/// Operations the auth provider consumes from the identity service
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// The current session, if any
    async fn current_session(&self) -> Result<Option<Session>, Error>;

    /// Register a listener for session changes
    fn subscribe(&self) -> broadcast::Receiver<AuthStateChange>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, Error>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, Error>;

    async fn sign_out(&self) -> Result<(), Error>;

    /// Remove an identity, used to undo a half-finished sign-up
    async fn delete_identity(&self, _user_id: &str) -> Result<(), Error> {
        Err(Error::Unsupported("delete identity"))
    }
}

#[async_trait]
impl IdentityService for Auth {
    async fn current_session(&self) -> Result<Option<Session>, Error> {
        Ok(self.get_session().await?)
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthStateChange> {
        self.on_auth_state_change()
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, Error> {
        Ok(Auth::sign_in_with_password(self, email, password).await?)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResponse, Error> {
        Ok(Auth::sign_up(self, email, password).await?)
    }

    async fn sign_out(&self) -> Result<(), Error> {
        Ok(Auth::sign_out(self).await?)
    }

    async fn delete_identity(&self, user_id: &str) -> Result<(), Error> {
        let admin = self
            .admin()
            .ok_or(mbet_adera_auth::AuthError::AdminUnavailable)?;
        admin.delete_user(user_id).await?;
        self.forget_session_of(user_id);
        Ok(())
    }
}
