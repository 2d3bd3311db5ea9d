//! Pattern seeding for the lifegrid kernel: a catalog of named patterns and
//! a deterministic random scatter.
//!
//! # Invariants
//! - Everything here seeds through `Life::set_alive`, so the kernel's
//!   bounds clipping applies uniformly.
//! - Scatter output depends only on its seed and region, never on ambient
//!   randomness.

pub mod catalog;
pub mod scatter;

pub use catalog::{CATALOG, Pattern, PatternError, find};
pub use scatter::Scatter;
