//! Input/output: configuration, rendering, progress and the command line

/// Command-line interface and generation pipeline
pub mod cli;
/// Compile-time defaults and limits
pub mod configuration;
/// Constraint set loading from TOML
pub mod constraints;
/// Error types shared across the crate
pub mod error;
/// Compositing the collapsed grid into a PNG
pub mod image;
/// Progress reporting for the command line
pub mod progress;
