use lifegrid_common::Cell;
use lifegrid_kernel::Life;

/// A named Life pattern, expressed as cell offsets relative to an anchor at
/// the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [(i64, i64)],
}

impl Pattern {
    /// Width of the pattern's bounding box.
    pub fn width(&self) -> i64 {
        self.offsets.iter().map(|&(x, _)| x).max().unwrap_or(-1) + 1
    }

    /// Height of the pattern's bounding box.
    pub fn height(&self) -> i64 {
        self.offsets.iter().map(|&(_, y)| y).max().unwrap_or(-1) + 1
    }

    /// The pattern's cells translated to the given anchor.
    pub fn cells_at(&self, anchor: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.offsets.iter().map(move |&(dx, dy)| anchor.offset(dx, dy))
    }

    /// Place the pattern onto the world at the given anchor. Cells falling
    /// outside the grid are clipped, per the kernel's seeding policy.
    pub fn stamp(&self, life: &mut Life, anchor: Cell) {
        life.set_alive(self.cells_at(anchor));
    }
}

/// Errors from pattern lookup.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("unknown pattern: {0}")]
    Unknown(String),
}

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    offsets: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    offsets: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    offsets: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const LIGHTWEIGHT_SPACESHIP: Pattern = Pattern {
    name: "LWSS",
    offsets: &[
        (1, 0),
        (4, 0),
        (0, 1),
        (0, 2),
        (4, 2),
        (0, 3),
        (1, 3),
        (2, 3),
        (3, 3),
    ],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Gun",
    offsets: &[
        (0, 4),
        (1, 4),
        (0, 5),
        (1, 5),
        (10, 4),
        (10, 5),
        (10, 6),
        (11, 3),
        (11, 7),
        (12, 2),
        (12, 8),
        (13, 2),
        (13, 8),
        (14, 5),
        (15, 3),
        (15, 7),
        (16, 4),
        (16, 5),
        (16, 6),
        (17, 5),
        (20, 2),
        (20, 3),
        (20, 4),
        (21, 2),
        (21, 3),
        (21, 4),
        (22, 1),
        (22, 5),
        (24, 0),
        (24, 1),
        (24, 5),
        (24, 6),
        (34, 2),
        (34, 3),
        (35, 2),
        (35, 3),
    ],
};

/// Every pattern the front end offers, in menu order.
pub const CATALOG: [Pattern; 5] = [
    BLINKER,
    TOAD,
    GLIDER,
    LIGHTWEIGHT_SPACESHIP,
    GOSPER_GLIDER_GUN,
];

/// Look up a catalog pattern by name, case-insensitively.
pub fn find(name: &str) -> Result<Pattern, PatternError> {
    CATALOG
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| PatternError::Unknown(name.to_string()))
}
