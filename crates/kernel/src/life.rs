use lifegrid_common::{Bounds, Cell};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Relative offsets of the Moore neighborhood: the 8 cells horizontally,
/// vertically, and diagonally adjacent, excluding the cell itself.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The authoritative Life simulation state.
///
/// All mutations go through explicit operations. The kernel owns the truth;
/// front ends only read the live set and call back in.
///
/// Live cells are stored sparsely as a set, so bounds like 10_000 × 10_000
/// cost memory proportional to the population, not the area. The grid
/// boundary is a hard wall: nothing outside `[0,width) × [0,height)` is ever
/// counted or born.
///
/// Out-of-bounds input to `set_alive` and `toggle` is silently dropped
/// rather than rejected with an error. Callers map viewport coordinates to
/// world coordinates and may legitimately land off the grid; that must
/// degrade gracefully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Life {
    bounds: Bounds,
    alive: HashSet<Cell>,
    generation: u64,
}

impl Life {
    /// Create an empty world with the given grid dimensions, at generation 0.
    ///
    /// Panics if either dimension is negative.
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            alive: HashSet::new(),
            generation: 0,
        }
    }

    /// Grid dimensions, fixed at construction.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of generations stepped since construction or the last `clear`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of currently live cells.
    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Read-only view of the live set. Iteration order is not meaningful.
    pub fn alive(&self) -> &HashSet<Cell> {
        &self.alive
    }

    /// Whether the cell at `(x, y)` is currently live.
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.alive.contains(&Cell::new(x, y))
    }

    /// Whether `(x, y)` is a legal coordinate on this grid.
    pub fn is_in_bounds(&self, x: i64, y: i64) -> bool {
        self.bounds.contains(Cell::new(x, y))
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.alive.clear();
        self.generation = 0;
    }

    /// Bring the given cells to life. Already-live cells are unaffected;
    /// out-of-bounds coordinates are silently dropped.
    pub fn set_alive(&mut self, cells: impl IntoIterator<Item = Cell>) {
        for cell in cells {
            if self.bounds.contains(cell) {
                self.alive.insert(cell);
            }
        }
    }

    /// Flip the cell at `(x, y)` between live and dead. No-op out of bounds.
    pub fn toggle(&mut self, x: i64, y: i64) {
        let cell = Cell::new(x, y);
        if !self.bounds.contains(cell) {
            return;
        }
        if !self.alive.remove(&cell) {
            self.alive.insert(cell);
        }
    }

    /// Advance the simulation by one generation.
    ///
    /// Neighbor counts are accumulated only for in-bounds neighbors of live
    /// cells, so cells with zero live neighbors never become birth
    /// candidates and the work stays proportional to the population. A cell
    /// is live next generation iff its count is exactly 3, or exactly 2
    /// while it is currently live.
    pub fn step(&mut self) {
        let mut neighbor_counts: HashMap<Cell, u8> = HashMap::with_capacity(self.alive.len() * 4);
        for &cell in &self.alive {
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let neighbor = cell.offset(dx, dy);
                if self.bounds.contains(neighbor) {
                    *neighbor_counts.entry(neighbor).or_insert(0) += 1;
                }
            }
        }

        // Build the complete next generation locally before replacing the
        // current one, so the transition is never partially visible.
        let next: HashSet<Cell> = neighbor_counts
            .into_iter()
            .filter(|&(cell, count)| count == 3 || (count == 2 && self.alive.contains(&cell)))
            .map(|(cell, _)| cell)
            .collect();

        self.alive = next;
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.alive.len(),
            "stepped"
        );
    }

    /// Compute a deterministic hash of the current live set and bounds.
    ///
    /// Independent of set iteration order (cells are hashed in sorted
    /// order) and of the generation counter, so callers can detect cycles
    /// and compare states across generations.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mut mix = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&self.bounds.width().to_le_bytes());
        mix(&self.bounds.height().to_le_bytes());
        let mut cells: Vec<Cell> = self.alive.iter().copied().collect();
        cells.sort_unstable();
        for cell in cells {
            mix(&cell.x.to_le_bytes());
            mix(&cell.y.to_le_bytes());
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(pairs: &[(i64, i64)]) -> Vec<Cell> {
        pairs.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn live_set(life: &Life) -> HashSet<Cell> {
        life.alive().clone()
    }

    #[test]
    fn world_starts_empty() {
        let life = Life::new(100, 100);
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn bounds_predicate_matches_legal_coordinates() {
        let life = Life::new(10, 6);
        assert!(life.is_in_bounds(0, 0));
        assert!(life.is_in_bounds(9, 5));
        assert!(!life.is_in_bounds(10, 0));
        assert!(!life.is_in_bounds(0, 6));
        assert!(!life.is_in_bounds(-1, 3));
        assert!(!life.is_in_bounds(3, -1));
    }

    #[test]
    fn set_alive_is_idempotent() {
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(1, 1), (2, 2)]));
        let once = live_set(&life);
        life.set_alive(cells(&[(1, 1), (2, 2)]));
        assert_eq!(live_set(&life), once);
        assert_eq!(life.population(), 2);
    }

    #[test]
    fn set_alive_drops_out_of_bounds_silently() {
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(-1, 0), (0, -1), (10, 0), (0, 10), (5, 5)]));
        assert_eq!(live_set(&life), cells(&[(5, 5)]).into_iter().collect());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut life = Life::new(10, 10);
        assert!(!life.is_alive(3, 3));
        life.toggle(3, 3);
        assert!(life.is_alive(3, 3));
        life.toggle(3, 3);
        assert!(!life.is_alive(3, 3));
    }

    #[test]
    fn toggle_out_of_bounds_is_a_noop() {
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(1, 1)]));
        let before = live_set(&life);
        life.toggle(-1, 5);
        life.toggle(10, 5);
        assert_eq!(live_set(&life), before);
    }

    #[test]
    fn clear_empties_any_state() {
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(1, 1), (2, 1), (3, 1)]));
        life.step();
        life.clear();
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(4, 4)]));
        life.step();
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn empty_world_is_a_fixed_point() {
        let mut life = Life::new(10, 10);
        life.step();
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut life = Life::new(10, 10);
        let horizontal: HashSet<Cell> = cells(&[(1, 2), (2, 2), (3, 2)]).into_iter().collect();
        life.set_alive(horizontal.iter().copied());

        life.step();
        let vertical: HashSet<Cell> = cells(&[(2, 1), (2, 2), (2, 3)]).into_iter().collect();
        assert_eq!(live_set(&life), vertical);

        life.step();
        assert_eq!(live_set(&life), horizontal);
    }

    #[test]
    fn dead_cell_with_two_neighbors_stays_dead() {
        // (2, 1) has exactly two live neighbors; birth requires three.
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(1, 1), (3, 1)]));
        life.step();
        assert!(!life.is_alive(2, 1));
        // Both live cells had at most one neighbor, so everything died.
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn dead_cell_with_three_neighbors_is_born() {
        // L-tromino fills in its corner and settles into a stable block.
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(1, 1), (2, 1), (1, 2)]));
        life.step();
        let block: HashSet<Cell> = cells(&[(1, 1), (2, 1), (1, 2), (2, 2)]).into_iter().collect();
        assert_eq!(live_set(&life), block);

        // Still life: a further step changes nothing.
        life.step();
        assert_eq!(live_set(&life), block);
    }

    #[test]
    fn boundary_is_a_hard_wall() {
        // Vertical blinker hugging the left edge: the rotation that would
        // put a cell at x = -1 simply loses that cell.
        let mut life = Life::new(4, 4);
        life.set_alive(cells(&[(0, 0), (0, 1), (0, 2)]));
        life.step();
        let expected: HashSet<Cell> = cells(&[(0, 1), (1, 1)]).into_iter().collect();
        assert_eq!(live_set(&life), expected);
        for cell in life.alive() {
            assert!(life.bounds().contains(*cell));
        }
    }

    #[test]
    fn corner_cell_produces_no_out_of_range_births() {
        let mut life = Life::new(2, 2);
        life.set_alive(cells(&[(0, 0), (1, 0), (0, 1)]));
        life.step();
        // All three survive with two neighbors each and (1, 1) is born.
        assert_eq!(life.population(), 4);
        for cell in life.alive() {
            assert!(cell.x >= 0 && cell.x < 2);
            assert!(cell.y >= 0 && cell.y < 2);
        }
    }

    #[test]
    fn step_counts_generations() {
        let mut life = Life::new(10, 10);
        life.step();
        life.step();
        life.step();
        assert_eq!(life.generation(), 3);
    }

    #[test]
    fn state_hash_ignores_insertion_order() {
        let mut a = Life::new(10, 10);
        let mut b = Life::new(10, 10);
        a.set_alive(cells(&[(1, 1), (2, 2), (3, 3)]));
        b.set_alive(cells(&[(3, 3), (1, 1), (2, 2)]));
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn state_hash_distinguishes_states() {
        let mut a = Life::new(10, 10);
        let b = Life::new(10, 10);
        assert_eq!(a.state_hash(), b.state_hash());
        a.toggle(5, 5);
        assert_ne!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn state_hash_survives_a_full_blinker_cycle() {
        let mut life = Life::new(10, 10);
        life.set_alive(cells(&[(1, 2), (2, 2), (3, 2)]));
        let start = life.state_hash();
        life.step();
        assert_ne!(life.state_hash(), start);
        life.step();
        assert_eq!(life.state_hash(), start);
    }

    #[test]
    fn cloned_worlds_are_independent() {
        let mut a = Life::new(10, 10);
        a.set_alive(cells(&[(1, 2), (2, 2), (3, 2)]));
        let mut b = a.clone();
        b.step();
        assert_eq!(a.generation(), 0);
        assert_eq!(a.population(), 3);
        assert_ne!(live_set(&a), live_set(&b));
    }

    #[test]
    fn very_large_grid_costs_only_the_population() {
        // The reference configuration: sparse storage makes this cheap.
        let mut life = Life::new(10_000, 10_000);
        life.set_alive(cells(&[(5_000, 5_000), (5_001, 5_000), (5_002, 5_000)]));
        life.step();
        assert_eq!(life.population(), 3);
        assert!(life.is_alive(5_001, 4_999));
        assert!(life.is_alive(5_001, 5_000));
        assert!(life.is_alive(5_001, 5_001));
    }
}
