use serde::{Deserialize, Serialize};

/// A single cell coordinate on the simulation grid.
///
/// Signed so that neighbor math at the origin and caller-side viewport
/// offset mapping never underflow; the engine clips to its bounds instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// This cell translated by the given delta.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed grid dimensions. Legal coordinates are `0..width` × `0..height`.
///
/// Immutable after construction; every engine operation checks membership
/// through [`Bounds::contains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    width: i64,
    height: i64,
}

impl Bounds {
    pub fn new(width: i64, height: i64) -> Self {
        assert!(
            width >= 0 && height >= 0,
            "grid dimensions must be non-negative"
        );
        Self { width, height }
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Whether the cell lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }
}
