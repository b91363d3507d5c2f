use ndarray::Array2;

/// Single coordinate axis used for grid size and positions.
pub type Coord = u8;

/// Count type used for cell totals and rail-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait OrthoNeighborIterExt {
    fn iter_orthogonal_neighbors(&self, index: Coord2) -> OrthoNeighborIter;
}

impl<T> OrthoNeighborIterExt for Array2<T> {
    fn iter_orthogonal_neighbors(&self, index: Coord2) -> OrthoNeighborIter {
        let dim = self.dim();
        let size = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        OrthoNeighborIter::new(index, size)
    }
}

// (row, col) deltas in compass-port order: North, East, South, West.
const DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterator over the up-to-four orthogonally adjacent coordinates.
///
/// Rail connectivity is strictly edge-based, so only orthogonal neighbors
/// exist as far as the network is concerned.
#[derive(Debug)]
pub struct OrthoNeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl OrthoNeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for OrthoNeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_cell_has_two_neighbors() {
        let grid: Array2<u8> = Array2::default([3, 3]);
        let neighbors: Vec<_> = grid.iter_orthogonal_neighbors((0, 0)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 0)]);
    }

    #[test]
    fn center_cell_has_four_neighbors() {
        let grid: Array2<u8> = Array2::default([3, 3]);
        let neighbors: Vec<_> = grid.iter_orthogonal_neighbors((1, 1)).collect();
        assert_eq!(neighbors, [(0, 1), (1, 2), (2, 1), (1, 0)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid: Array2<u8> = Array2::default([1, 1]);
        assert_eq!(grid.iter_orthogonal_neighbors((0, 0)).count(), 0);
    }
}
