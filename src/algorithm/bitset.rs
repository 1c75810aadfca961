use crate::algorithm::rules::TileId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size ordered set of tile ids
///
/// Bit `i` stands for `TileId(i)`, so iteration always follows rule-table
/// order no matter how the set was narrowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
        }
    }

    /// Create a bitset containing all possible tiles
    pub fn all(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![1; max_tiles],
        }
    }

    /// Create a bitset holding just `tile`
    pub fn singleton(tile: TileId, max_tiles: usize) -> Self {
        let mut bitset = Self::new(max_tiles);
        bitset.insert(tile);
        bitset
    }

    /// Number of tiles this set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile; ids beyond the capacity are ignored
    pub fn insert(&mut self, tile: TileId) {
        if tile.index() < self.bits.len() {
            self.bits.set(tile.index(), true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileId) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Whether every tile of this set is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|tile| other.contains(tile))
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`-th tile in order, if the set has that many
    pub fn nth(&self, n: usize) -> Option<TileId> {
        self.bits.iter_ones().nth(n).map(TileId::new)
    }

    /// Iterate tiles in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = TileId> + '_ {
        self.bits.iter_ones().map(TileId::new)
    }

    /// Extract all tiles as a vector
    pub fn to_vec(&self) -> Vec<TileId> {
        self.iter().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<usize> = self.iter().map(TileId::index).collect();
        write!(f, "TileBitset({} tiles: {indices:?})", self.count())
    }
}
