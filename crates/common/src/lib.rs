//! Shared types for the lifegrid engine: grid coordinates and grid bounds.
//!
//! # Invariants
//! - `Bounds` dimensions are non-negative and immutable after construction.
//! - Coordinate math is plain integer arithmetic; no floating point anywhere.

pub mod types;

pub use types::{Bounds, Cell};
