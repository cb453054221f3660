//! # Services Module
//!
//! External service integrations: the account service (auth, profiles,
//! avatar storage) and the market-data provider.
//!
//! ```text
//! services/
//! └── api/   - HTTP gateways for both external services
//! ```

pub mod api;
