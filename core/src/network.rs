use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::*;

/// Cells belonging to one connected run of track, in discovery order.
pub type Component = SmallVec<[Coord2; 8]>;

/// Diagnostic breakdown of the rail network, for callers that want to show
/// which cells failed instead of a bare boolean.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkReport {
    pub rail_cell_count: CellCount,
    pub components: Vec<Component>,
}

impl NetworkReport {
    /// The resolved validity rule: at least two rail-bearing cells, all of
    /// them in a single connected component.
    ///
    /// A grid without rail cells has no network and a lone rail segment
    /// connects nothing, so both are invalid.
    pub fn is_valid(&self) -> bool {
        self.rail_cell_count >= 2 && self.components.len() == 1
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Rail cells that have no connected rail neighbor at all.
    pub fn isolated_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.components
            .iter()
            .filter(|component| component.len() == 1)
            .map(|component| component[0])
    }
}

/// Whether the rail segments on `grid` form a valid connected network.
///
/// Pure and idempotent; the grid is only read.
pub fn validate(grid: &Grid) -> bool {
    analyze(grid).is_valid()
}

/// Splits the rail-bearing cells of `grid` into connected components under
/// the pairwise port rule.
pub fn analyze(grid: &Grid) -> NetworkReport {
    let size = grid.size();
    let mut visited: HashSet<Coord2> = HashSet::new();
    let mut components: Vec<Component> = Vec::new();
    let mut rail_cell_count: CellCount = 0;

    for row in 0..size {
        for col in 0..size {
            let coords = (row, col);
            if !grid[coords].kind.is_rail_bearing() {
                continue;
            }
            rail_cell_count += 1;
            if visited.contains(&coords) {
                continue;
            }

            let mut component = Component::new();
            let mut to_visit = VecDeque::from([coords]);
            visited.insert(coords);

            while let Some(current) = to_visit.pop_front() {
                component.push(current);
                for next in grid.iter_orthogonal_neighbors(current) {
                    if visited.contains(&next) {
                        continue;
                    }
                    if !grid[next].kind.is_rail_bearing() {
                        continue;
                    }
                    if pair_connected(grid[current].kind, grid[next].kind, current, next) {
                        visited.insert(next);
                        to_visit.push_back(next);
                    }
                }
            }

            log::trace!(
                "component starting at {:?} covers {} cells",
                coords,
                component.len()
            );
            components.push(component);
        }
    }

    log::debug!(
        "network analysis: {} rail cells in {} components",
        rail_cell_count,
        components.len()
    );
    NetworkReport {
        rail_cell_count,
        components,
    }
}

/// Whether two orthogonally adjacent cells are connected through their ports.
///
/// Out-of-bounds coordinates fail fast; non-adjacent cells are never
/// connected.
pub fn cells_connected(grid: &Grid, current: Coord2, next: Coord2) -> Result<bool> {
    let current = grid.validate_coords(current)?;
    let next = grid.validate_coords(next)?;

    let row_difference = current.0.abs_diff(next.0);
    let col_difference = current.1.abs_diff(next.1);
    if row_difference + col_difference != 1 {
        return Ok(false);
    }

    Ok(pair_connected(
        grid[current].kind,
        grid[next].kind,
        current,
        next,
    ))
}

/// Port index offset pairing `current`'s ports with `next`'s: vertical
/// neighbors pair through the geometric opposite (offset 2), horizontal
/// neighbors through the historical offset of 1.
const fn port_offset(current: Coord2, next: Coord2) -> usize {
    if current.0 != next.0 { 2 } else { 1 }
}

fn pair_connected(current: TileKind, next: TileKind, at: Coord2, to: Coord2) -> bool {
    let current_ports = current.connection_vector();
    let next_ports = next.connection_vector();
    let offset = port_offset(at, to);

    for i in 0..4 {
        for j in 0..4 {
            if current_ports[i] && next_ports[j] && (i + offset) % 4 == j {
                return true;
            }
        }
    }
    false
}
