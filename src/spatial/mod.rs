//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates and neighbour directions
//! - The square cell grid and its text view

/// Square cell grid storage
pub mod grid;
/// Grid coordinates and the four neighbour directions
pub mod position;

pub use grid::Grid;
pub use position::{Direction, Position};
