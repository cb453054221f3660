//! # Service Traits
//!
//! Traits for dependency injection, enabling mocks in tests and
//! alternative transports without touching consumers.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::{Coin, PriceHistory, Profile, SearchHit, Session};

/// Account service operations: authentication, credentials, and profile
/// rows for the currently authenticated user.
///
/// Implemented by [`crate::services::api::ApiClient`].
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Exchange credentials for a session and store it.
    async fn sign_in(&self, email: String, password: String) -> Result<Session>;

    /// Register a new account and store the resulting session.
    async fn sign_up(&self, email: String, password: String) -> Result<Session>;

    /// Invalidate the session upstream and clear the local store.
    async fn sign_out(&self) -> Result<()>;

    /// Change the current user's password. Leaves the session untouched.
    async fn update_password(&self, new_password: String) -> Result<()>;

    /// Fetch the profile row for the current user.
    async fn get_profile(&self) -> Result<Profile>;

    /// Upsert the profile row for the current user.
    async fn update_profile(
        &self,
        username: String,
        full_name: String,
        avatar_url: String,
    ) -> Result<()>;
}

/// Market-data operations: read-only pass-through to the price provider.
///
/// Implemented by [`crate::services::api::market::MarketClient`].
#[async_trait]
pub trait MarketApi: Send + Sync {
    /// Top coins by market cap (provider-fixed page size).
    async fn coins(&self) -> Result<Vec<Coin>>;

    /// A single coin by its provider id.
    async fn coin(&self, uuid: &str) -> Result<Coin>;

    /// 24h price history for a coin.
    async fn coin_history(&self, uuid: &str) -> Result<PriceHistory>;

    /// Search suggestions for a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}
