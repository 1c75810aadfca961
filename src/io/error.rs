//! Error types for rule loading, collapsing and rendering

use crate::spatial::Position;
use std::fmt;
use std::path::PathBuf;

/// A cell was selected for observation with no candidate tiles left
///
/// Collapsing never backtracks, so this aborts the whole run. Callers that
/// want another try should `reset` the engine and collapse again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContradictionError {
    /// Grid position of the contradicting cell
    pub position: Position,
}

impl fmt::Display for ContradictionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "found contradiction at {} (no possible tiles)",
            self.position
        )
    }
}

impl std::error::Error for ContradictionError {}

/// Main error type for all crate operations
#[derive(Debug)]
pub enum WfcError {
    /// Collapse ran into a cell with an empty candidate set
    Contradiction(ContradictionError),

    /// Constraint file could not be parsed
    ConfigurationParse {
        /// Path to the constraint file
        path: PathBuf,
        /// Underlying deserialization error
        source: toml::de::Error,
    },

    /// Constraint set parsed but is not a usable rule table
    InvalidConfiguration {
        /// Description of what's wrong with the configuration
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to open or decode a tile asset
    AssetLoad {
        /// Path to the asset file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Tile asset decoded but cannot be placed on the canvas
    InvalidAsset {
        /// Path to the asset file
        path: PathBuf,
        /// Explanation of the mismatch
        reason: String,
    },

    /// Rendering was requested before every cell was collapsed
    IncompleteGrid {
        /// Number of collapsed cells
        collapsed: usize,
        /// Total number of cells
        total: usize,
    },

    /// Failed to save the rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl WfcError {
    /// Whether this error is a collapse contradiction rather than an I/O or configuration failure
    pub const fn is_contradiction(&self) -> bool {
        matches!(self, Self::Contradiction(_))
    }
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction(error) => write!(f, "{error}"),
            Self::ConfigurationParse { path, source } => {
                write!(
                    f,
                    "Failed to parse constraints '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::AssetLoad { path, source } => {
                write!(f, "Failed to load asset '{}': {source}", path.display())
            }
            Self::InvalidAsset { path, reason } => {
                write!(f, "Invalid asset '{}': {reason}", path.display())
            }
            Self::IncompleteGrid { collapsed, total } => {
                write!(
                    f,
                    "Grid is not fully collapsed ({collapsed} of {total} cells)"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WfcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Contradiction(error) => Some(error),
            Self::ConfigurationParse { source, .. } => Some(source),
            Self::AssetLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ContradictionError> for WfcError {
    fn from(err: ContradictionError) -> Self {
        Self::Contradiction(err)
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, WfcError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WfcError {
    WfcError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(reason: &impl ToString) -> WfcError {
    WfcError::InvalidConfiguration {
        reason: reason.to_string(),
    }
}
