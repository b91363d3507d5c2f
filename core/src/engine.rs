use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Solved,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// A puzzle session from first edit to solve.
///
/// Owns the grid exclusively; the caller keeps timer, player name, and
/// persistence on its side and snapshots the engine through serde.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleEngine {
    grid: Grid,
    state: EngineState,
}

impl PuzzleEngine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self.grid.tile_at(coords)
    }

    /// Places `kind` on an unfixed cell.
    ///
    /// Matches the original click behavior: fixed and oasis cells are
    /// untouchable, and dropping a straight or curve rail also advances the
    /// cell's rotation a quarter turn.
    pub fn place_tile(&mut self, coords: Coord2, kind: TileKind) -> Result<EditOutcome> {
        use EditOutcome::*;

        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.grid[coords];
        if tile.fixed || tile.kind == TileKind::Oasis {
            return Ok(NoChange);
        }

        let rotation = match kind {
            TileKind::StraightRail | TileKind::CurveRail => tile.rotation.turned_cw(),
            _ => tile.rotation,
        };
        if tile.kind == kind && tile.rotation == rotation {
            return Ok(NoChange);
        }

        self.grid.set_tile(coords, Tile::new(kind, rotation))?;
        log::debug!("placed {:?} at {:?}, rotation {:?}", kind, coords, rotation);
        self.mark_started();
        Ok(Changed)
    }

    /// Advances the cell through the edit cycle, for clicks without a
    /// palette selection.
    pub fn cycle_tile(&mut self, coords: Coord2) -> Result<EditOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        let next_kind = self.grid[coords].kind.next_in_cycle();
        self.place_tile(coords, next_kind)
    }

    /// Rotates an unfixed cell a quarter turn clockwise.
    pub fn rotate_tile(&mut self, coords: Coord2) -> Result<EditOutcome> {
        use EditOutcome::*;

        let coords = self.grid.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.grid[coords];
        if tile.fixed {
            return Ok(NoChange);
        }

        self.grid.set_tile(
            coords,
            Tile {
                rotation: tile.rotation.turned_cw(),
                ..tile
            },
        )?;
        self.mark_started();
        Ok(Changed)
    }

    /// Runs the network validator against the current grid. A solved puzzle
    /// is final: later edits and checks fail with [`GameError::AlreadyEnded`].
    pub fn check_solution(&mut self) -> Result<CheckOutcome> {
        self.check_not_finished()?;

        if validate(&self.grid) {
            self.state = EngineState::Solved;
            log::debug!("puzzle solved");
            Ok(CheckOutcome::Solved)
        } else {
            Ok(CheckOutcome::NotSolved)
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            log::debug!("first edit, session active");
            self.state = EngineState::Active;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
