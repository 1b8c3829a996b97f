//! `shelfwise-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory engine and
//! its hosts (no infrastructure concerns).

pub mod error;

pub use error::{DomainError, DomainResult};
