//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login_form`) so pages can depend on
//! small focused models that are testable without a browser.

pub mod login_form;
pub mod session;
