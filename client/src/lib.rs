//! # Fintech Crypto Client Core
//!
//! The non-UI core of a cryptocurrency price tracker: session state,
//! account/profile gateways, market data, and the navigation gate that
//! decides which screen tree a front end should mount.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │               client (this crate)                   │
//! ├─────────────────────────────────────────────────────┤
//! │  store      - Persisted session store (observable)  │
//! │  services   - Account + market HTTP gateways        │
//! │  app        - Navigation gate state machine         │
//! │  config     - Environment-driven configuration      │
//! └─────────────────────────────────────────────────────┘
//!          │                          │
//!          │ HTTPS                    │ HTTPS
//!          ▼                          ▼
//! ┌─────────────────┐      ┌──────────────────────┐
//! │ Account service │      │ Market-data provider │
//! │ (auth/profiles/ │      │ (coins, history,     │
//! │  avatar blobs)  │      │  search)             │
//! └─────────────────┘      └──────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Session Store
//!
//! [`store::SessionStore`] owns the current [`shared::Session`] and
//! [`shared::UserIdentity`] for the process, persists every mutation to a
//! durable key-value backend under a fixed key, and notifies subscribers
//! on every change. Persistence failures are logged and never surfaced to
//! callers; the in-memory state stays authoritative.
//!
//! ### Gateways
//!
//! [`services::api::ApiClient`] translates account intents (sign-in,
//! sign-up, password change, profile read/write, avatar blobs) into HTTP
//! calls and writes auth results into the session store.
//! [`services::api::market::MarketClient`] is a pass-through client for
//! the market-data provider. All gateway calls are single-shot: no retry,
//! no caching, errors go back to the caller.
//!
//! ### Navigation Gate
//!
//! [`app::gate`] is a pure function of the session store's state choosing
//! between exactly two screen trees, recomputed on every observed change.

pub mod app;
pub mod config;
pub mod core;
pub mod services;
pub mod store;
pub mod utils;

// Re-export the types most consumers need.
pub use app::gate::{NavState, RootNavigation, ScreenTree};
pub use config::Config;
pub use self::core::{ApiError, Result};
pub use store::{SessionState, SessionStore};
