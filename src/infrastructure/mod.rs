//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! file I/O, persistence, and the tabular checklist file codec.

pub mod persistence;

pub use persistence::*;
