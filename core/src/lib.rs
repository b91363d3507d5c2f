#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use network::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod network;
mod tile;
mod types;

/// Difficulty presets of the original game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Easy => GameConfig::EASY,
            Self::Hard => GameConfig::HARD,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub levels: u8,
}

impl GameConfig {
    pub const EASY: GameConfig = GameConfig { size: 5, levels: 5 };
    pub const HARD: GameConfig = GameConfig { size: 7, levels: 5 };

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

/// Square board of tiles. Squareness is enforced at construction, so every
/// grid handed to the validator is already well-formed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// All-empty, unfixed grid, the state a level starts from.
    pub fn empty(size: Coord) -> Self {
        Self {
            tiles: Array2::default([size as usize, size as usize]),
        }
    }

    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let dim = tiles.dim();
        if dim.0 != dim.1 || dim.0 > Coord::MAX as usize {
            return Err(GameError::InvalidGridShape);
        }
        Ok(Self { tiles })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.tiles.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.tiles.len().try_into().unwrap()
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }

    pub fn set_tile(&mut self, coords: Coord2, tile: Tile) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.tiles[coords.to_nd_index()] = tile;
        Ok(())
    }

    pub(crate) fn iter_orthogonal_neighbors(&self, coords: Coord2) -> OrthoNeighborIter {
        self.tiles.iter_orthogonal_neighbors(coords)
    }
}

impl Index<Coord2> for Grid {
    type Output = Tile;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.tiles[(row as usize, col as usize)]
    }
}

/// Outcome of a player edit on a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditOutcome {
    NoChange,
    Changed,
}

impl EditOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a solution check.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CheckOutcome {
    NotSolved,
    Solved,
}

impl CheckOutcome {
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_tiles_rejects_non_square_input() {
        let tiles: Array2<Tile> = Array2::default([2, 3]);
        assert_eq!(Grid::from_tiles(tiles), Err(GameError::InvalidGridShape));
    }

    #[test]
    fn from_tiles_accepts_square_input() {
        let tiles: Array2<Tile> = Array2::default([5, 5]);
        let grid = Grid::from_tiles(tiles).unwrap();
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.total_cells(), 25);
    }

    #[test]
    fn validate_coords_rejects_out_of_bounds() {
        let grid = Grid::empty(5);
        assert_eq!(grid.validate_coords((4, 4)), Ok((4, 4)));
        assert_eq!(grid.validate_coords((5, 0)), Err(GameError::InvalidCoords));
        assert_eq!(grid.validate_coords((0, 5)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn set_tile_validates_coords() {
        let mut grid = Grid::empty(3);
        let tile = Tile::new(TileKind::StraightRail, Rotation::R0);
        grid.set_tile((1, 2), tile).unwrap();
        assert_eq!(grid[(1, 2)], tile);
        assert_eq!(grid.set_tile((3, 0), tile), Err(GameError::InvalidCoords));
    }

    #[test]
    fn empty_grid_defaults_to_unfixed_empty_tiles() {
        let grid = Grid::empty(5);
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(grid[(row, col)], Tile::default());
            }
        }
    }

    #[test]
    fn difficulty_presets_match_original_sizes() {
        assert_eq!(Difficulty::Easy.config().size, 5);
        assert_eq!(Difficulty::Hard.config().size, 7);
        assert_eq!(GameConfig::EASY.total_cells(), 25);
        assert_eq!(GameConfig::HARD.total_cells(), 49);
    }
}
