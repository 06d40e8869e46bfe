//! Core Traits for Voltwatch
//!
//! ## Module Organization
//!
//! - [`time`] - Time source abstraction, the engine's only injected dependency

pub mod time;

pub use time::TimeSource;
