//! Wave function collapse over a square tile grid
//!
//! Every cell starts with all tiles of an adjacency rule table. The engine
//! repeatedly collapses the least-determined cell and narrows its four
//! neighbours to the tiles the table permits, until every cell is decided or
//! a cell runs out of candidates. The finished grid can be composited into a
//! PNG from per-tile bitmaps.

#![forbid(unsafe_code)]

/// Core algorithm: cells, rules and the collapse engine
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid coordinates and cell storage
pub mod spatial;

pub use algorithm::engine::{CollapseStep, WaveFunctionCollapse};
pub use algorithm::rules::{AdjacencyRules, TileId};
pub use io::error::{ContradictionError, Result, WfcError};
