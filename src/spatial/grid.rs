//! Square cell grid owned by the collapse engine
//!
//! Cells are stored in an `ndarray::Array2` indexed `[row, col]`, i.e.
//! `[y, x]`, so iteration order is row-major: `y` outer, `x` inner.

use ndarray::Array2;
use std::fmt;

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::cell::Cell;
use crate::algorithm::rules::{AdjacencyRules, TileId};
use crate::spatial::Position;

/// `size × size` array of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    size: usize,
}

impl Grid {
    /// Create a grid where every cell starts with `candidates`
    pub fn new(size: usize, candidates: &TileBitset) -> Self {
        let cells = Array2::from_shape_fn((size, size), |(row, col)| {
            Cell::new(Position::new(col as i32, row as i32), candidates.clone())
        });
        Self { cells, size }
    }

    /// Edge length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Cell at `position`, if it lies inside the grid
    pub fn get(&self, position: Position) -> Option<&Cell> {
        position.to_index().and_then(|index| self.cells.get(index))
    }

    /// Mutable cell at `position`, if it lies inside the grid
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Cell> {
        position.to_index().and_then(|index| self.cells.get_mut(index))
    }

    /// Cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether every cell is collapsed
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Collapsed tile at `position`
    pub fn tile_at(&self, position: Position) -> Option<TileId> {
        self.get(position).and_then(Cell::collapsed_tile)
    }

    /// Text view of the grid using tile names from `rules`
    pub const fn display<'a>(&'a self, rules: &'a AdjacencyRules) -> GridDisplay<'a> {
        GridDisplay { grid: self, rules }
    }
}

/// Renders one row per line: tile names for collapsed cells, `?` for
/// undecided cells and `!` for contradictions
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    rules: &'a AdjacencyRules,
}

impl GridDisplay<'_> {
    fn label(&self, cell: &Cell) -> &str {
        match cell.collapsed_tile() {
            Some(tile) => self.rules.name(tile).unwrap_or("#"),
            None if cell.is_contradiction() => "!",
            None => "?",
        }
    }
}

impl fmt::Display for GridDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .grid
            .iter()
            .map(|cell| self.label(cell).chars().count())
            .max()
            .unwrap_or(1);

        for row in self.grid.cells.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("{:<width$}", self.label(cell)))
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
