//! Collapse driver: minimum-entropy selection, observation and propagation
//!
//! Each step picks the least-determined uncollapsed cell, commits it to one
//! of its candidates and narrows its four neighbours to what the rule table
//! permits next to the chosen tile. Nothing is ever undone: an empty
//! candidate set surfaces as a [`ContradictionError`] when that cell is
//! observed.

use crate::algorithm::cell::Cell;
use crate::algorithm::rules::{AdjacencyRules, TileId};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{ContradictionError, Result, invalid_parameter};
use crate::spatial::{Direction, Grid, Position};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Outcome of a single [`WaveFunctionCollapse::collapse_next`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseStep {
    /// A cell was committed to a tile and its neighbours narrowed
    Collapsed {
        /// Position of the collapsed cell
        position: Position,
        /// Tile the cell was committed to
        tile: TileId,
    },
    /// No uncollapsed cell remains
    Complete,
}

impl CollapseStep {
    /// Whether the grid is finished
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Wave function collapse over a square grid
///
/// The random source is injected so a fixed seed reproduces the same grid.
pub struct WaveFunctionCollapse<R = StdRng> {
    rules: AdjacencyRules,
    size: usize,
    grid: Grid,
    rng: R,
}

impl WaveFunctionCollapse<StdRng> {
    /// Create an engine driven by a seeded `StdRng`
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or exceeds [`MAX_GRID_DIMENSION`]
    pub fn new(rules: AdjacencyRules, size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(rules, size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> WaveFunctionCollapse<R> {
    /// Create an engine driven by `rng` and build its grid
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or exceeds [`MAX_GRID_DIMENSION`]
    pub fn with_rng(rules: AdjacencyRules, size: usize, rng: R) -> Result<Self> {
        if size == 0 || size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("grid size must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        let grid = Grid::new(size, &rules.all_tiles());
        Ok(Self {
            rules,
            size,
            grid,
            rng,
        })
    }

    /// Replace the grid with fresh cells holding every tile
    pub fn build(&mut self) {
        self.grid = Grid::new(self.size, &self.rules.all_tiles());
    }

    /// Discard all progress; same as [`WaveFunctionCollapse::build`]
    pub fn reset(&mut self) {
        self.build();
    }

    /// The current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The adjacency rules driving propagation
    pub const fn rules(&self) -> &AdjacencyRules {
        &self.rules
    }

    /// Edge length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether every cell is collapsed
    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    /// Uncollapsed cell with the lowest entropy
    ///
    /// Scans row-major and only replaces the incumbent on strictly lower
    /// entropy, so ties go to the earliest cell. Rows are `y`, so a tie
    /// between the right and the lower neighbour goes to the right one.
    pub fn find_min_entropy_cell(&self) -> Option<&Cell> {
        let mut best: Option<(&Cell, isize)> = None;
        for cell in self.grid.iter().filter(|cell| !cell.is_collapsed()) {
            let entropy = cell.entropy();
            if best.is_none_or(|(_, min)| entropy < min) {
                best = Some((cell, entropy));
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// Collapse the minimum-entropy cell and narrow its neighbours
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] if the selected cell has no candidates left
    pub fn collapse_next(&mut self) -> std::result::Result<CollapseStep, ContradictionError> {
        let Some(position) = self.find_min_entropy_cell().map(Cell::position) else {
            return Ok(CollapseStep::Complete);
        };

        let tile = self
            .grid
            .get_mut(position)
            .ok_or(ContradictionError { position })?
            .observe(&mut self.rng)?;

        for direction in Direction::ALL {
            let neighbor_position = position.neighbor(direction);
            if neighbor_position.is_out_of_grid(self.size) {
                continue;
            }
            let Some(neighbor) = self.grid.get_mut(neighbor_position) else {
                continue;
            };
            if neighbor.is_collapsed() {
                continue;
            }
            neighbor.narrow(self.rules.allowed(tile, direction));
        }

        Ok(CollapseStep::Collapsed { position, tile })
    }

    /// Collapse until every cell is decided
    ///
    /// Stops at the first contradiction without retrying.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContradictionError`] encountered
    pub fn collapse(&mut self) -> std::result::Result<(), ContradictionError> {
        while !self.collapse_next()?.is_done() {}
        Ok(())
    }

    /// Collapse, starting over from a fresh grid after each contradiction
    ///
    /// The random stream is not reseeded, so every attempt sees different
    /// choices. `on_step` receives the 1-based attempt number and each step.
    /// Returns the number of attempts used.
    ///
    /// # Errors
    ///
    /// Returns the contradiction of the last attempt once `max_attempts`
    /// (at least one) are used up
    pub fn collapse_with_retries<F>(
        &mut self,
        max_attempts: usize,
        mut on_step: F,
    ) -> std::result::Result<usize, ContradictionError>
    where
        F: FnMut(usize, &CollapseStep),
    {
        let max_attempts = max_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.collapse_next() {
                Ok(step) => {
                    on_step(attempt, &step);
                    if step.is_done() {
                        return Ok(attempt);
                    }
                }
                Err(error) if attempt >= max_attempts => return Err(error),
                Err(_) => {
                    attempt += 1;
                    self.reset();
                }
            }
        }
    }
}
