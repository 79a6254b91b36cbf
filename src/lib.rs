//! MBet-Adera client core
//!
//! Session, profile and translation plumbing for the MBet-Adera delivery
//! tracking client. The hosted backend provides identity (GoTrue) and the
//! `users` profile table (PostgREST); this crate keeps the rendering layer's
//! view of "who is logged in" in sync with them.

pub mod config;
pub mod error;
pub mod fetch;
pub mod identity;
pub mod profiles;
pub mod provider;

pub use mbet_adera_auth as auth;
pub use mbet_adera_i18n as i18n;

use log::debug;
use reqwest::Client;
use std::sync::Arc;

use crate::auth::{Auth, AuthOptions};
use crate::config::{ClientOptions, EnvConfig};
use crate::error::Error;
use crate::profiles::PostgrestProfiles;
use crate::provider::{AuthProvider, AuthProviderBuilder};

/// The main entry point: shared HTTP client, identity client and options
pub struct MbetAdera {
    /// The base URL for the project
    pub url: String,
    /// The anonymous API key for the project
    pub key: String,
    /// HTTP client used for requests
    pub http_client: Client,
    /// Identity client, shared with the profile store for its access token
    pub auth: Arc<Auth>,
    /// Client options
    pub options: ClientOptions,
}

impl MbetAdera {
    /// Create a new client
    ///
    /// # Example
    ///
    /// ```
    /// use mbet_adera::MbetAdera;
    ///
    /// let client = MbetAdera::new("https://your-project.supabase.co", "your-anon-key").unwrap();
    /// ```
    pub fn new(url: &str, key: &str) -> Result<Self, Error> {
        Self::new_with_options(url, key, ClientOptions::default())
    }

    /// Create a new client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use mbet_adera::{config::ClientOptions, MbetAdera};
    ///
    /// let options = ClientOptions::default().with_authenticated_route("/dashboard/orders");
    /// let client = MbetAdera::new_with_options(
    ///     "https://your-project.supabase.co",
    ///     "your-anon-key",
    ///     options,
    /// )
    /// .unwrap();
    /// ```
    pub fn new_with_options(url: &str, key: &str, options: ClientOptions) -> Result<Self, Error> {
        url::Url::parse(url)?;
        let url = url.trim_end_matches('/').to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let auth_options = AuthOptions {
            auto_refresh_token: options.auto_refresh_token,
        };
        let mut auth = Auth::new(&url, key, http_client.clone(), auth_options);
        if let Some(service_role_key) = &options.service_role_key {
            auth = auth.with_service_role_key(service_role_key);
        }

        debug!("Created client for {}", url);

        Ok(Self {
            url,
            key: key.to_string(),
            http_client,
            auth: Arc::new(auth),
            options,
        })
    }

    /// Create a client from `SUPABASE_URL`, `SUPABASE_ANON_KEY` and the
    /// optional `SUPABASE_SERVICE_ROLE_KEY`
    pub fn from_env(options: ClientOptions) -> Result<Self, Error> {
        let env = EnvConfig::from_env()?;
        let options = match env.service_role_key {
            Some(key) => options.with_service_role_key(&key),
            None => options,
        };
        Self::new_with_options(&env.url, &env.anon_key, options)
    }

    /// The identity client
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Profile store for the configured table, authorized with the live session
    pub fn profiles(&self) -> PostgrestProfiles {
        PostgrestProfiles::new(
            &self.url,
            &self.key,
            &self.options.profiles_table,
            self.http_client.clone(),
        )
        .with_auth(self.auth.clone())
    }

    /// Auth provider builder wired to this client's collaborators
    pub fn auth_provider(&self) -> AuthProviderBuilder {
        AuthProvider::builder(self.auth.clone(), Arc::new(self.profiles()))
            .options(self.options.clone())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::i18n::{Key, Language, Locale};
    pub use crate::profiles::{ProfileDetails, UserProfile, UserRole};
    pub use crate::provider::{AuthListener, AuthProvider, AuthState, ProfileState};
    pub use crate::MbetAdera;
}
