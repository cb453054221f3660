//! # API Client
//!
//! Main HTTP client for the account service (auth, profiles, storage).

use crate::config::Config;
use crate::core::error::{ApiError, Result};
use crate::core::service::AccountApi;
use crate::store::SessionStore;
use reqwest::Client;
use shared::{ApiErrorBody, Profile, Session};

/// HTTP client for the account service.
///
/// Holds the connection pool, the public API key sent with every request,
/// and a handle to the session store: auth endpoints write the resulting
/// identity into the store, authenticated endpoints read the bearer token
/// from it.
pub struct ApiClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_key: String,
    pub(crate) store: SessionStore,
}

impl ApiClient {
    /// Create a new API client with default configuration.
    ///
    /// The client is configured with a 10 second timeout to prevent
    /// indefinitely hanging calls.
    pub fn new(config: &Config, store: SessionStore) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.account_url.trim_end_matches('/').to_string(),
            api_key: config.account_key.clone(),
            store,
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer token and user id of the current session, or `Unauthorized`.
    pub(crate) fn bearer(&self) -> Result<(String, String)> {
        match self.store.current().session {
            Some(session) => Ok((session.access_token, session.user.id)),
            None => Err(ApiError::Unauthorized),
        }
    }
}

/// Extract the upstream error message from a non-2xx response.
///
/// The message is passed through verbatim; an unparseable body falls back
/// to the status code.
pub(crate) async fn remote_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ApiErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("upstream returned status {status}"));
    ApiError::Remote(message)
}

#[async_trait::async_trait]
impl AccountApi for ApiClient {
    async fn sign_in(&self, email: String, password: String) -> Result<Session> {
        super::auth::sign_in(self, email, password).await
    }

    async fn sign_up(&self, email: String, password: String) -> Result<Session> {
        super::auth::sign_up(self, email, password).await
    }

    async fn sign_out(&self) -> Result<()> {
        super::auth::sign_out(self).await
    }

    async fn update_password(&self, new_password: String) -> Result<()> {
        super::auth::update_password(self, new_password).await
    }

    async fn get_profile(&self) -> Result<Profile> {
        super::profile::get_profile(self).await
    }

    async fn update_profile(
        &self,
        username: String,
        full_name: String,
        avatar_url: String,
    ) -> Result<()> {
        super::profile::update_profile(self, username, full_name, avatar_url).await
    }
}
