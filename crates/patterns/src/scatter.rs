use lifegrid_common::Cell;
use lifegrid_kernel::Life;

/// Deterministic random seeding: scatters live cells over a rectangular
/// region at a given density.
///
/// The generator is a splitmix64 stream, so the same seed and region always
/// produce the same fill. Seeds flow through `Life::set_alive` and inherit
/// its bounds clipping.
#[derive(Debug, Clone)]
pub struct Scatter {
    state: u64,
}

impl Scatter {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform draw in `[0, 1)` from the top 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Fill the `width` × `height` region anchored at `origin`, bringing
    /// each cell to life with probability `density`.
    pub fn fill(&mut self, life: &mut Life, origin: Cell, width: i64, height: i64, density: f64) {
        let mut seeds = Vec::new();
        for dy in 0..height {
            for dx in 0..width {
                if self.next_f64() < density {
                    seeds.push(origin.offset(dx, dy));
                }
            }
        }
        life.set_alive(seeds);
    }
}
