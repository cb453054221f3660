//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the client core and the
//! two external services it talks to: the account service (auth, profiles,
//! avatar storage) and the market-data service (coin prices).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::account`]**: Session, identity, and profile DTOs
//!   - **[`dto::market`]**: Coin list, detail, history, and search DTOs
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON via `serde`:
//! - Account types use **snake_case** field names (the account service's
//!   native shape)
//! - Market types use **camelCase** on the wire (`#[serde(rename_all)]`),
//!   matching the upstream provider
//! - Optional fields are omitted from JSON when `None`
//! - All types implement both `Serialize` and `Deserialize`

pub mod dto;

// Re-export commonly used types for convenience. Wildcard re-exports are
// fine here since shared is a DTO library where everything is public API.
pub use dto::*;
