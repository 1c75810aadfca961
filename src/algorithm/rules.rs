//! Adjacency rule table with interned tile identifiers
//!
//! Tile names are interned in their natural (sorted) order when the table is
//! built. Every candidate set in the grid is a [`TileBitset`] over those ids.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, invalid_configuration};
use crate::spatial::Direction;
use std::collections::BTreeMap;

/// Interned tile identifier
///
/// Only meaningful together with the [`AdjacencyRules`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(usize);

impl TileId {
    /// Wrap a raw table index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw table index
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Raw rule table keyed by tile name, as read from configuration
pub type RuleTable = BTreeMap<String, BTreeMap<Direction, Vec<String>>>;

/// A permission granted in one direction that the neighbour does not grant back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asymmetry {
    /// Tile granting the permission
    pub tile: TileId,
    /// Direction from `tile` to `neighbor`
    pub direction: Direction,
    /// Neighbour that does not allow `tile` in the opposite direction
    pub neighbor: TileId,
}

/// Immutable adjacency table: tile → direction → permitted neighbours
#[derive(Debug, Clone)]
pub struct AdjacencyRules {
    names: Vec<String>,
    allowed: Vec<[TileBitset; 4]>,
    empty: TileBitset,
}

impl AdjacencyRules {
    /// Start an empty rule builder
    pub fn builder() -> RulesBuilder {
        RulesBuilder::default()
    }

    /// Intern a raw rule table
    ///
    /// Directions absent from a tile's entry permit no neighbour at all.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table defines no tiles
    /// - An entry names a neighbour that is not itself a tile of the table
    pub fn from_table(table: &RuleTable) -> Result<Self> {
        if table.is_empty() {
            return Err(invalid_configuration(&"rule table defines no tiles"));
        }

        let names: Vec<String> = table.keys().cloned().collect();
        let tile_count = names.len();
        let lookup = |name: &str| names.binary_search_by(|n| n.as_str().cmp(name)).ok();

        let mut allowed = Vec::with_capacity(tile_count);
        for (tile, directions) in table {
            let mut sets: [TileBitset; 4] = std::array::from_fn(|_| TileBitset::new(tile_count));
            for (direction, neighbors) in directions {
                let Some(set) = sets.get_mut(direction.index()) else {
                    continue;
                };
                for neighbor in neighbors {
                    let id = lookup(neighbor).ok_or_else(|| {
                        invalid_configuration(&format!(
                            "tile '{tile}' allows undefined tile '{neighbor}' in direction {direction}"
                        ))
                    })?;
                    set.insert(TileId::new(id));
                }
            }
            allowed.push(sets);
        }

        Ok(Self {
            names,
            allowed,
            empty: TileBitset::new(tile_count),
        })
    }

    /// Number of distinct tiles
    pub fn tile_count(&self) -> usize {
        self.names.len()
    }

    /// All tile ids in table order
    pub fn tiles(&self) -> impl Iterator<Item = TileId> {
        (0..self.names.len()).map(TileId::new)
    }

    /// Set holding every tile, the starting candidates of a fresh cell
    pub fn all_tiles(&self) -> TileBitset {
        TileBitset::all(self.tile_count())
    }

    /// Name of a tile
    pub fn name(&self, tile: TileId) -> Option<&str> {
        self.names.get(tile.index()).map(String::as_str)
    }

    /// Look up a tile by name
    pub fn id(&self, name: &str) -> Option<TileId> {
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .ok()
            .map(TileId::new)
    }

    /// Tiles allowed next to `tile` in `direction`
    ///
    /// Ids from another table resolve to the empty set.
    pub fn allowed(&self, tile: TileId, direction: Direction) -> &TileBitset {
        self.allowed
            .get(tile.index())
            .and_then(|sets| sets.get(direction.index()))
            .unwrap_or(&self.empty)
    }

    /// Permissions that are not mirrored by the neighbour
    pub fn asymmetries(&self) -> Vec<Asymmetry> {
        let mut found = Vec::new();
        for tile in self.tiles() {
            for direction in Direction::ALL {
                for neighbor in self.allowed(tile, direction).iter() {
                    if !self.allowed(neighbor, direction.opposite()).contains(tile) {
                        found.push(Asymmetry {
                            tile,
                            direction,
                            neighbor,
                        });
                    }
                }
            }
        }
        found
    }
}

/// Incremental construction of an [`AdjacencyRules`] table
#[derive(Debug, Clone, Default)]
pub struct RulesBuilder {
    table: RuleTable,
}

impl RulesBuilder {
    /// Declare a tile without granting any permission
    #[must_use]
    pub fn tile(mut self, name: impl Into<String>) -> Self {
        self.table.entry(name.into()).or_default();
        self
    }

    /// Allow `neighbors` next to `tile` in `direction`, declaring `tile` if needed
    #[must_use]
    pub fn allow<I>(mut self, tile: impl Into<String>, direction: Direction, neighbors: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.table
            .entry(tile.into())
            .or_default()
            .entry(direction)
            .or_default()
            .extend(neighbors.into_iter().map(Into::into));
        self
    }

    /// Intern the collected table
    ///
    /// # Errors
    ///
    /// Same conditions as [`AdjacencyRules::from_table`]
    pub fn build(&self) -> Result<AdjacencyRules> {
        AdjacencyRules::from_table(&self.table)
    }
}
