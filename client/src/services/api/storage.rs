//! # Avatar Storage Endpoints
//!
//! Blob download and upload for avatar images. Paths are relative to the
//! `avatars` bucket; the profile row stores the path, never the bytes.

use super::client::{remote_error, ApiClient};
use crate::core::error::{ApiError, Result};

/// Download an avatar blob by its storage path.
#[tracing::instrument(skip(client), fields(path = %path))]
pub async fn download(client: &ApiClient, path: &str) -> Result<Vec<u8>> {
    let (token, _) = client.bearer()?;

    let response = client
        .client
        .get(client.endpoint(&format!("/storage/v1/object/avatars/{path}")))
        .header("apikey", &client.api_key)
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await?;
        tracing::debug!(size = bytes.len(), "Avatar downloaded");
        Ok(bytes.to_vec())
    } else if status == reqwest::StatusCode::NOT_FOUND {
        Err(ApiError::NotFound)
    } else {
        Err(remote_error(response).await)
    }
}

/// Upload an avatar blob. Returns the storage path to put in the profile
/// row on success.
#[tracing::instrument(skip(client, bytes), fields(path = %path, size = bytes.len()))]
pub async fn upload(
    client: &ApiClient,
    path: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<String> {
    let (token, _) = client.bearer()?;

    let response = client
        .client
        .post(client.endpoint(&format!("/storage/v1/object/avatars/{path}")))
        .header("apikey", &client.api_key)
        .header(reqwest::header::CONTENT_TYPE, content_type)
        .bearer_auth(token)
        .body(bytes)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("Avatar uploaded");
        Ok(path.to_string())
    } else {
        let error = remote_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Avatar upload failed");
        Err(error)
    }
}
