use crate::*;
pub use random::*;

mod random;

/// Produces a populated starting grid for a level.
pub trait LevelGenerator {
    fn generate(self, config: GameConfig) -> Grid;
}
