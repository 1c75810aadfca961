//! Constraint set loading
//!
//! A constraint set is a TOML document giving the pixel resolution of the
//! tile bitmaps and, per tile, the tiles allowed next to it in each
//! direction:
//!
//! ```toml
//! name = "road"
//! resolution = 16
//!
//! [rules.grass]
//! up = ["grass", "road_h"]
//! left = ["grass", "road_v"]
//! ```
//!
//! A direction left out of a tile's entry permits nothing there.

use crate::algorithm::rules::{AdjacencyRules, RuleTable};
use crate::io::error::{Result, WfcError, invalid_configuration};
use serde::Deserialize;
use std::path::Path;

/// Deserialized constraint file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstraintsSet {
    /// Display name of the tile set
    #[serde(default)]
    pub name: Option<String>,
    /// Edge length of each tile bitmap in pixels
    pub resolution: u32,
    /// Permitted neighbours per tile and direction
    pub rules: RuleTable,
}

impl ConstraintsSet {
    /// Read and parse a constraint file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// constraint document
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| WfcError::FileSystem {
            path: path.to_path_buf(),
            operation: "read constraints",
            source: e,
        })?;
        Self::parse(&content, path)
    }

    /// Parse constraint TOML; `origin` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed, has unknown keys or
    /// directions, or declares a zero resolution
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let constraints: Self =
            toml::from_str(content).map_err(|e| WfcError::ConfigurationParse {
                path: origin.to_path_buf(),
                source: e,
            })?;

        if constraints.resolution == 0 {
            return Err(invalid_configuration(&"resolution must be positive"));
        }
        Ok(constraints)
    }

    /// Intern the rule table
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty or references undefined tiles
    pub fn adjacency_rules(&self) -> Result<AdjacencyRules> {
        AdjacencyRules::from_table(&self.rules)
    }
}
