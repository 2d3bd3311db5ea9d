//! Life kernel: authoritative simulation state and generation stepping.
//!
//! # Invariants
//! - The live set is always a subset of the grid's legal coordinates;
//!   every mutation point enforces this, not just construction.
//! - Stepping cost is proportional to the live population and its
//!   neighborhood, never to the grid area.
//! - A generation transition is all-or-nothing: readers never observe a
//!   partially applied step.

pub mod life;

pub use life::Life;
