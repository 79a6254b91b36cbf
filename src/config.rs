//! Configuration options for the MBet-Adera client

use std::env;
use std::time::Duration;

use crate::error::Error;

/// Environment variable holding the project URL
pub const URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the anonymous API key
pub const ANON_KEY_ENV: &str = "SUPABASE_ANON_KEY";
/// Optional environment variable holding the service role key
pub const SERVICE_ROLE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Configuration options for the client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Refresh an expired session before handing it out
    pub auto_refresh_token: bool,

    /// Timeout applied to every HTTP request. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,

    /// Table holding user profiles
    pub profiles_table: String,

    /// Route opened after a successful sign-in or sign-up
    pub authenticated_route: String,

    /// Route opened after sign-out
    pub landing_route: String,

    /// Delete the identity when the profile insert fails during sign-up
    pub compensate_orphaned_identity: bool,

    /// Service role key enabling the admin API
    pub service_role_key: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            auto_refresh_token: true,
            request_timeout: None,
            profiles_table: "users".to_string(),
            authenticated_route: "/dashboard".to_string(),
            landing_route: "/".to_string(),
            compensate_orphaned_identity: false,
            service_role_key: None,
        }
    }
}

impl ClientOptions {
    /// Set whether to automatically refresh the token
    pub fn with_auto_refresh_token(mut self, value: bool) -> Self {
        self.auto_refresh_token = value;
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the profiles table
    pub fn with_profiles_table(mut self, value: &str) -> Self {
        self.profiles_table = value.to_string();
        self
    }

    /// Set the route opened after signing in or up
    pub fn with_authenticated_route(mut self, value: &str) -> Self {
        self.authenticated_route = value.to_string();
        self
    }

    /// Set the route opened after signing out
    pub fn with_landing_route(mut self, value: &str) -> Self {
        self.landing_route = value.to_string();
        self
    }

    /// Set whether a failed sign-up deletes the identity it created
    pub fn with_compensate_orphaned_identity(mut self, value: bool) -> Self {
        self.compensate_orphaned_identity = value;
        self
    }

    /// Set the service role key
    pub fn with_service_role_key(mut self, value: &str) -> Self {
        self.service_role_key = Some(value.to_string());
        self
    }
}

/// Connection settings read from the environment
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub url: String,
    pub anon_key: String,
    pub service_role_key: Option<String>,
}

impl EnvConfig {
    /// Read `SUPABASE_URL`, `SUPABASE_ANON_KEY` and, if set,
    /// `SUPABASE_SERVICE_ROLE_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        let url = required(URL_ENV)?;
        url::Url::parse(&url)?;

        Ok(Self {
            url,
            anon_key: required(ANON_KEY_ENV)?,
            service_role_key: env::var(SERVICE_ROLE_KEY_ENV)
                .ok()
                .filter(|value| !value.is_empty()),
        })
    }
}

fn required(name: &str) -> Result<String, Error> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::config(format!("{} must be set", name))),
    }
}
