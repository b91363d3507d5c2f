use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Compass side of a tile, in the index order used by connection vectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn opposite(self) -> Direction {
        use Direction::*;
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }
}

/// Which of a tile's four sides are open for rail connectivity,
/// indexed by [`Direction`].
pub type ConnectionVector = [bool; 4];

const ALL_OPEN: ConnectionVector = [true, true, true, true];
const ALL_CLOSED: ConnectionVector = [false, false, false, false];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    StraightRail,
    CurveRail,
    Bridge,
    BridgeRail,
    Mountain,
    MountainRail,
    Oasis,
}

impl TileKind {
    /// Base connection vector in the tile's unrotated orientation.
    ///
    /// Every rail-bearing kind exposes all four ports open, so the vector is
    /// rotation-invariant. Rotation is still tracked per tile for display.
    pub const fn connection_vector(self) -> ConnectionVector {
        use TileKind::*;
        match self {
            Empty => ALL_CLOSED,
            StraightRail => ALL_OPEN,
            CurveRail => ALL_OPEN,
            Bridge => ALL_CLOSED,
            BridgeRail => ALL_OPEN,
            Mountain => ALL_CLOSED,
            MountainRail => ALL_OPEN,
            Oasis => ALL_CLOSED,
        }
    }

    /// Whether this kind participates in the rail network.
    pub const fn is_rail_bearing(self) -> bool {
        use TileKind::*;
        matches!(self, StraightRail | CurveRail | BridgeRail | MountainRail)
    }

    pub const fn is_open(self, direction: Direction) -> bool {
        self.connection_vector()[direction.index()]
    }

    /// Next kind when the player cycles a cell without a palette selection.
    ///
    /// Base terrain toggles its railed form; oasis never changes.
    pub const fn next_in_cycle(self) -> TileKind {
        use TileKind::*;
        match self {
            Empty => StraightRail,
            StraightRail => CurveRail,
            CurveRail => Empty,
            Bridge => BridgeRail,
            BridgeRail => Bridge,
            Mountain => MountainRail,
            MountainRail => Mountain,
            Oasis => Oasis,
        }
    }
}

impl Default for TileKind {
    fn default() -> Self {
        Self::Empty
    }
}

/// Quarter-turn rotation of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Parses a rotation in degrees, reduced modulo 360.
    pub fn from_degrees(degrees: u16) -> Result<Self> {
        match degrees % 360 {
            0 => Ok(Self::R0),
            90 => Ok(Self::R90),
            180 => Ok(Self::R180),
            270 => Ok(Self::R270),
            _ => Err(GameError::InvalidRotation),
        }
    }

    pub const fn degrees(self) -> u16 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// One quarter turn clockwise.
    pub const fn turned_cw(self) -> Self {
        match self {
            Self::R0 => Self::R90,
            Self::R90 => Self::R180,
            Self::R180 => Self::R270,
            Self::R270 => Self::R0,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::R0
    }
}

/// A single grid cell: kind, rotation, and whether level generation pinned it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub rotation: Rotation,
    pub fixed: bool,
}

impl Tile {
    pub const fn new(kind: TileKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            fixed: false,
        }
    }

    pub const fn fixed(kind: TileKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            fixed: true,
        }
    }
}
