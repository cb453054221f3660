//! # Data Transfer Objects (DTOs)
//!
//! Data structures for communication with the external account service and
//! the market-data provider.
//!
//! ## Module Organization
//!
//! - [`account`] - Session, user identity, credentials, and profile DTOs
//! - [`market`] - Coin list, coin detail, price history, and search DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Account types**: snake_case fields (default serde behavior)
//! - **Market types**: camelCase fields on the wire, every payload wrapped
//!   in a `{"status": ..., "data": ...}` envelope
//! - **Optional fields**: omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: implement both `Serialize` and `Deserialize`

pub mod account;
pub mod market;

pub use account::*;
pub use market::*;
