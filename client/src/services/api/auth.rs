//! # Authentication Endpoints
//!
//! Sign-in, sign-up, sign-out, and password change against the account
//! service. Successful auth exchanges write the session and user identity
//! into the session store as one atomic pair.

use super::client::{remote_error, ApiClient};
use crate::core::error::{ApiError, Result};
use crate::utils::validation::{validate_email, validate_password};
use shared::{Credentials, PasswordChange, Session};

/// Exchange email and password for a session.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn sign_in(client: &ApiClient, email: String, password: String) -> Result<Session> {
    tracing::info!("Attempting sign-in");
    let start = std::time::Instant::now();

    let request = Credentials { email, password };

    let response = client
        .client
        .post(client.endpoint("/auth/v1/token"))
        .query(&[("grant_type", "password")])
        .header("apikey", &client.api_key)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Sign-in network error");
            ApiError::from(e)
        })?;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_success() {
        let session = response.json::<Session>().await.map_err(|e| {
            tracing::error!(error = %e, "Sign-in response parse error");
            ApiError::Transport(format!("failed to parse response: {e}"))
        })?;

        client
            .store
            .set_identity(Some(session.clone()), Some(session.user.clone()));
        tracing::info!(duration_ms = duration.as_millis(), "Sign-in successful");
        Ok(session)
    } else {
        let error = remote_error(response).await;
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            error = %error,
            "Sign-in failed"
        );
        Err(error)
    }
}

/// Register a new account.
///
/// Validates the email shape and password length locally before any
/// network call; the provider in this deployment auto-confirms, so a
/// successful response carries a usable session.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn sign_up(client: &ApiClient, email: String, password: String) -> Result<Session> {
    let email_check = validate_email(&email);
    if !email_check.is_valid {
        return Err(ApiError::Validation(
            email_check.error.unwrap_or_else(|| "Invalid email".to_string()),
        ));
    }
    let password_check = validate_password(&password);
    if !password_check.is_valid {
        return Err(ApiError::Validation(
            password_check.error.unwrap_or_else(|| "Invalid password".to_string()),
        ));
    }

    let request = Credentials { email, password };

    let response = client
        .client
        .post(client.endpoint("/auth/v1/signup"))
        .header("apikey", &client.api_key)
        .json(&request)
        .send()
        .await?;

    if response.status().is_success() {
        let session = response
            .json::<Session>()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to parse response: {e}")))?;

        client
            .store
            .set_identity(Some(session.clone()), Some(session.user.clone()));
        tracing::info!("Sign-up successful");
        Ok(session)
    } else {
        Err(remote_error(response).await)
    }
}

/// Invalidate the session upstream and clear the local store.
///
/// The store is cleared even when the upstream call fails: the user asked
/// to be signed out, and the local session is gone either way. Upstream
/// failures are logged only.
#[tracing::instrument(skip(client))]
pub async fn sign_out(client: &ApiClient) -> Result<()> {
    if let Ok((token, _)) = client.bearer() {
        let result = client
            .client
            .post(client.endpoint("/auth/v1/logout"))
            .header("apikey", &client.api_key)
            .bearer_auth(token)
            .send()
            .await;

        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(status = response.status().as_u16(), "Upstream sign-out failed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Upstream sign-out unreachable");
            }
            Ok(_) => {}
        }
    }

    client.store.clear();
    tracing::info!("Signed out");
    Ok(())
}

/// Request a credential change for the current session.
///
/// The session store is never touched here: on success the existing
/// session stays valid, on failure the upstream message is returned
/// verbatim.
#[tracing::instrument(skip(client, new_password))]
pub async fn update_password(client: &ApiClient, new_password: String) -> Result<()> {
    let (token, _) = client.bearer()?;

    let response = client
        .client
        .put(client.endpoint("/auth/v1/user"))
        .header("apikey", &client.api_key)
        .bearer_auth(token)
        .json(&PasswordChange { password: new_password })
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        tracing::info!("Password updated");
        Ok(())
    } else {
        let error = remote_error(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Password update rejected");
        Err(error)
    }
}
