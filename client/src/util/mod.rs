//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routing, guard decisions and form rules are kept free of view code so
//! pages stay thin and the logic is unit-testable.

pub mod auth;
pub mod credentials;
pub mod route;
pub mod validation;
