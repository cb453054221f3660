//! # Application Layer
//!
//! The navigation gate: the decision point between the authenticated and
//! unauthenticated screen trees.

pub mod gate;

pub use gate::{NavState, RootNavigation, ScreenTree};
