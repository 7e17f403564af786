use ndarray::Array2;

/// Single coordinate axis used for board columns, rows, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, column first.
pub type Coord2 = (Coord, Coord);

/// Grids are stored row-major with shape `(rows, cols)`, so `(x, y)` maps to `[y, x]`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Size of a row-major grid as `(cols, rows)`.
pub fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (cols as Coord, rows as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, grid_size(self))
    }
}

/// Walks the 3x3 window around a cell row by row, clipped to the grid and skipping the cell
/// itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    x_start: Coord,
    x_end: Coord,
    y_end: Coord,
    next: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (x, y) = center;
        let (cols, rows) = bounds;
        let x_start = x.saturating_sub(1);
        let y_start = y.saturating_sub(1);
        let x_end = x.saturating_add(1).min(cols.saturating_sub(1));
        let y_end = y.saturating_add(1).min(rows.saturating_sub(1));
        let inside = x < cols && y < rows;

        Self {
            center,
            x_start,
            x_end,
            y_end,
            next: inside.then_some((x_start, y_start)),
        }
    }

    fn advance(&self, (x, y): Coord2) -> Option<Coord2> {
        if x < self.x_end {
            Some((x + 1, y))
        } else if y < self.y_end {
            Some((self.x_start, y + 1))
        } else {
            None
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            self.next = self.advance(current);
            if current != self.center {
                return Some(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();
        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn far_edge_is_clipped() {
        let neighbors: Vec<_> = NeighborIter::new((99, 50), (100, 100)).collect();
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.iter().all(|&(x, _)| x < 100));
    }

    #[test]
    fn neighbors_come_out_row_major() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();
        assert_eq!(
            neighbors,
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn center_outside_grid_has_no_neighbors() {
        assert_eq!(NeighborIter::new((3, 0), (3, 3)).count(), 0);
    }

    #[test]
    fn nd_index_is_row_major() {
        let grid: Array2<u8> = Array2::zeros((3, 5));
        assert_eq!(grid_size(&grid), (5, 3));
        assert_eq!((4, 2).to_nd_index(), [2, 4]);
    }
}
