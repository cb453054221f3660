//! # Core Abstractions
//!
//! Error types and service traits shared by the rest of the crate.
//!
//! - **[`error`]**: the gateway error taxonomy ([`ApiError`], [`Result`])
//! - **[`service`]**: dependency-injection traits for the account and
//!   market gateways ([`AccountApi`], [`MarketApi`])

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::{AccountApi, MarketApi};
