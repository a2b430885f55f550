//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components are presentation-only; form and session logic lives in
//! `state` and `util`.

pub mod form_field;
