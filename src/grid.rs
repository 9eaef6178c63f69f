use log::{debug, warn};

use crate::color::ColorToken;

pub type CellCoord = i32;
pub type Cell = Option<ColorToken>;

/// Immutable copy of every cell of a grid, in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot(Box<[Cell]>);

/// Fixed-size raster of optional colors, indexed by `row * columns + column`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Storage index of `(x, y)`, or `None` when the coordinate lies outside
    /// the grid.
    pub fn index(&self, x: CellCoord, y: CellCoord) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.columns || y >= self.rows {
            return None;
        }
        Some(y * self.columns + x)
    }

    /// Store `color` at `(x, y)`. Returns false (and changes nothing) when the
    /// coordinate is out of bounds.
    pub fn set_cell(&mut self, x: CellCoord, y: CellCoord, color: Cell) -> bool {
        let Some(i) = self.index(x, y) else {
            debug!("Ignoring write outside grid at ({}, {})", x, y);
            return false;
        };
        self.cells[i] = color;
        true
    }

    pub fn get_cell(&self, x: CellCoord, y: CellCoord) -> Option<&ColorToken> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.cells.clone().into_boxed_slice())
    }

    /// Replace every cell with the snapshot's contents. A snapshot taken from a
    /// grid of another size is rejected.
    pub fn restore(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.0.len() != self.cells.len() {
            warn!(
                "Snapshot has {} cells but grid has {}, not restoring",
                snapshot.0.len(),
                self.cells.len()
            );
            return false;
        }
        self.cells.clone_from_slice(&snapshot.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> ColorToken {
        ColorToken::from("#e03c28")
    }

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(16, 16);
        assert_eq!(grid.cells().len(), 256);
        assert!(grid.is_blank());
    }

    #[test]
    fn set_then_get_round_trips_every_cell() {
        let mut grid = Grid::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert!(grid.set_cell(x, y, Some(red())));
                assert_eq!(grid.get_cell(x, y), Some(&red()));
                assert!(grid.set_cell(x, y, None));
                assert_eq!(grid.get_cell(x, y), None);
            }
        }
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(5, 4);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(4, 0), Some(4));
        assert_eq!(grid.index(0, 1), Some(5));
        assert_eq!(grid.index(2, 3), Some(17));
    }

    #[test]
    fn out_of_bounds_access_is_a_no_op() {
        let mut grid = Grid::new(4, 4);
        grid.set_cell(3, 3, Some(red()));
        let before = grid.clone();

        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (4, 4), (i32::MIN, i32::MAX)] {
            assert!(!grid.set_cell(x, y, Some(ColorToken::from("#ffffff"))));
            assert_eq!(grid.get_cell(x, y), None);
        }
        // (4, 0) must not wrap onto (0, 1)
        assert_eq!(grid, before);
    }

    #[test]
    fn clear_empties_everything() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(0, 0, Some(red()));
        grid.set_cell(2, 2, Some(red()));
        grid.clear();
        assert!(grid.is_blank());
    }

    #[test]
    fn restore_rejects_foreign_snapshot() {
        let other = Grid::new(2, 2).snapshot();
        let mut grid = Grid::new(3, 3);
        grid.set_cell(1, 1, Some(red()));
        assert!(!grid.restore(&other));
        assert_eq!(grid.get_cell(1, 1), Some(&red()));
    }
}
