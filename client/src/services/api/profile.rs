//! # Profile Endpoints
//!
//! Row-level read and upsert for the current user's profile. The profile
//! is never cached here; each caller re-fetches independently.

use super::client::{remote_error, ApiClient};
use crate::core::error::{ApiError, Result};
use shared::{Profile, ProfileUpdate};

/// Fetch the profile row for the currently authenticated user.
///
/// A missing row maps to [`ApiError::NotFound`]; callers treat that as
/// non-fatal and render defaults (the row appears on first update).
#[tracing::instrument(skip(client))]
pub async fn get_profile(client: &ApiClient) -> Result<Profile> {
    let (token, user_id) = client.bearer()?;
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(client.endpoint("/rest/v1/profiles"))
        .query(&[
            ("id", format!("eq.{user_id}").as_str()),
            ("select", "username,full_name,avatar_url"),
        ])
        .header("apikey", &client.api_key)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Profile fetch network error");
            ApiError::from(e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let rows = response.json::<Vec<Profile>>().await.map_err(|e| {
            tracing::error!(error = %e, "Profile response parse error");
            ApiError::Transport(format!("failed to parse response: {e}"))
        })?;

        tracing::debug!(
            duration_ms = duration.as_millis(),
            found = !rows.is_empty(),
            "Profile fetched"
        );
        rows.into_iter().next().ok_or(ApiError::NotFound)
    } else {
        let error = remote_error(response).await;
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            error = %error,
            "Profile fetch failed"
        );
        Err(error)
    }
}

/// Upsert the three profile fields for the current user.
///
/// Username uniqueness is not checked at this layer, and the avatar path
/// is not verified to resolve in storage.
#[tracing::instrument(skip(client), fields(username = %username))]
pub async fn update_profile(
    client: &ApiClient,
    username: String,
    full_name: String,
    avatar_url: String,
) -> Result<()> {
    let (token, user_id) = client.bearer()?;

    let row = ProfileUpdate {
        id: user_id,
        username,
        full_name,
        avatar_url,
        updated_at: chrono::Utc::now(),
    };

    let response = client
        .client
        .post(client.endpoint("/rest/v1/profiles"))
        .header("apikey", &client.api_key)
        .header("Prefer", "resolution=merge-duplicates")
        .bearer_auth(token)
        .json(&row)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("Profile updated");
        Ok(())
    } else {
        let error = remote_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Profile update failed");
        Err(error)
    }
}
