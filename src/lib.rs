//! TCKL - Terminal Checklist Library
//!
//! A terminal-based implantation checklist application, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
