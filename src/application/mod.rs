//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing the per-company checklist store, application state, and user
//! interactions.

pub mod state;

pub use state::*;
