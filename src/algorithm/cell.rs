use crate::algorithm::bitset::TileBitset;
use crate::algorithm::rules::TileId;
use crate::io::error::ContradictionError;
use crate::spatial::Position;
use rand::Rng;

/// One grid slot and the tiles it may still become
///
/// Candidates only ever shrink. Once collapsed the cell holds exactly one
/// tile and is frozen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    candidates: TileBitset,
    collapsed: bool,
}

impl Cell {
    /// Create an uncollapsed cell
    pub const fn new(position: Position, candidates: TileBitset) -> Self {
        Self {
            position,
            candidates,
            collapsed: false,
        }
    }

    /// Grid position of this cell
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Remaining candidate tiles in table order
    pub const fn candidates(&self) -> &TileBitset {
        &self.candidates
    }

    /// Whether the cell has been committed to a tile
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether the candidate set ran empty
    pub fn is_contradiction(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Remaining candidates minus one
    ///
    /// `-1` marks a contradiction and `0` a decided cell.
    pub fn entropy(&self) -> isize {
        self.candidates.count() as isize - 1
    }

    /// The committed tile, once collapsed
    pub fn collapsed_tile(&self) -> Option<TileId> {
        if self.collapsed {
            self.candidates.nth(0)
        } else {
            None
        }
    }

    /// Commit to one candidate chosen uniformly with `rng`
    ///
    /// Call at most once per cell, when it is selected for collapse.
    ///
    /// # Errors
    ///
    /// Returns [`ContradictionError`] when no candidate is left. The cell is
    /// left uncollapsed in that case.
    pub fn observe<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TileId, ContradictionError> {
        let count = self.candidates.count();
        let contradiction = ContradictionError {
            position: self.position,
        };
        if count == 0 {
            return Err(contradiction);
        }

        let tile = self
            .candidates
            .nth(rng.random_range(0..count))
            .ok_or(contradiction)?;
        self.candidates = TileBitset::singleton(tile, self.candidates.capacity());
        self.collapsed = true;
        Ok(tile)
    }

    /// Keep only candidates that are also in `allowed`
    ///
    /// Does nothing on a collapsed cell. May leave the cell empty; that only
    /// becomes an error when the cell is observed.
    pub fn narrow(&mut self, allowed: &TileBitset) {
        if self.collapsed {
            return;
        }
        self.candidates.intersect_with(allowed);
    }
}
