//! Profile storage through the PostgREST API

mod types;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use std::sync::Arc;

use mbet_adera_auth::Auth;

use crate::error::Error;
use crate::fetch::Fetch;

pub use types::*;

/// Point lookups and inserts of profile rows keyed by identity id
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile belonging to `user_id`
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, Error>;

    /// Insert a new profile row
    async fn insert_profile(&self, profile: &NewProfile) -> Result<(), Error>;
}

/// Profile store backed by a PostgREST table
pub struct PostgrestProfiles {
    /// The base URL for the project
    url: String,

    /// The anonymous API key
    key: String,

    /// The table holding profile rows
    table: String,

    /// HTTP client
    client: Client,

    /// Source of the caller's access token, for row level security
    auth: Option<Arc<Auth>>,
}

impl PostgrestProfiles {
    pub fn new(url: &str, key: &str, table: &str, client: Client) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            key: key.to_string(),
            table: table.to_string(),
            client,
            auth: None,
        }
    }

    /// Authorize requests with the signed-in user's token when there is one
    pub fn with_auth(mut self, auth: Arc<Auth>) -> Self {
        self.auth = Some(auth);
        self
    }

    fn get_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }

    async fn bearer_token(&self) -> String {
        let Some(auth) = &self.auth else {
            return self.key.clone();
        };

        match auth.get_session().await {
            Ok(Some(session)) => session.access_token,
            Ok(None) => self.key.clone(),
            Err(err) => {
                warn!("Could not read session for profile request, using anon key: {}", err);
                self.key.clone()
            }
        }
    }
}

#[async_trait]
impl ProfileStore for PostgrestProfiles {
    async fn fetch_profile(&self, user_id: &str) -> Result<UserProfile, Error> {
        let token = self.bearer_token().await;
        let url = self.get_url();

        let rows = Fetch::get(&self.client, &url)
            .header("apikey", &self.key)
            .bearer_auth(&token)
            .query("select", "*")
            .query("id", &format!("eq.{}", user_id))
            .execute::<Vec<UserProfile>>()
            .await?;

        debug!("Fetched {} profile row(s) for {}", rows.len(), user_id);

        rows.into_iter()
            .next()
            .ok_or_else(|| Error::ProfileNotFound(user_id.to_string()))
    }

    async fn insert_profile(&self, profile: &NewProfile) -> Result<(), Error> {
        let token = self.bearer_token().await;
        let url = self.get_url();

        Fetch::post(&self.client, &url)
            .header("apikey", &self.key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&token)
            .json(profile)?
            .execute_empty()
            .await
    }
}
