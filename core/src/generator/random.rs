use super::*;

/// Generation strategy matching the original level tables: every cell rolls
/// once, with a 10% chance each of a fixed mountain, bridge, oasis, straight
/// rail, or curve rail, and stays an unfixed empty cell otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomLevelGenerator {
    seed: u64,
}

impl RandomLevelGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Derives a stable seed for a given difficulty level, so reloading the
    /// same level reproduces the same layout.
    pub fn for_level(difficulty: Difficulty, level: u8) -> Self {
        let tag = match difficulty {
            Difficulty::Easy => 0u64,
            Difficulty::Hard => 1u64,
        };
        Self::new((tag << 32) | level as u64)
    }
}

impl LevelGenerator for RandomLevelGenerator {
    fn generate(self, config: GameConfig) -> Grid {
        use rand::prelude::*;
        use TileKind::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut grid = Grid::empty(config.size);
        let mut fixed_count: CellCount = 0;

        for row in 0..config.size {
            for col in 0..config.size {
                let roll: f64 = rng.random();
                let (kind, fixed) = if roll < 0.1 {
                    (Mountain, true)
                } else if roll < 0.2 {
                    (Bridge, true)
                } else if roll < 0.3 {
                    (Oasis, true)
                } else if roll < 0.4 {
                    (StraightRail, true)
                } else if roll < 0.5 {
                    (CurveRail, true)
                } else {
                    (Empty, false)
                };

                if fixed {
                    fixed_count += 1;
                }
                let tile = Tile {
                    kind,
                    rotation: Rotation::R0,
                    fixed,
                };
                grid.set_tile((row, col), tile).expect("coords stay within config.size");
            }
        }

        log::debug!(
            "generated {size}x{size} level, {fixed_count} fixed cells",
            size = config.size
        );
        grid
    }
}
