//! # Utility Functions
//!
//! - **[`validation`]**: local input validation for sign-up fields

pub mod validation;
