//! # API Gateway Module
//!
//! Thin request/response wrappers over the two external HTTP services.
//! Every operation is asynchronous, single-shot (no retry), and returns
//! errors to its caller instead of handling them.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and common functionality
//! ├── auth.rs     - Authentication endpoints (sign-in, sign-up, sign-out, password)
//! ├── profile.rs  - Profile row read/upsert
//! ├── storage.rs  - Avatar blob download/upload
//! └── market.rs   - Market-data endpoints (coins, detail, history, search)
//! ```

pub mod auth;
pub mod client;
pub mod market;
pub mod profile;
pub mod storage;

pub use client::ApiClient;
pub use market::MarketClient;
