//! Runtime configuration defaults and limits

// Default values for configurable parameters
/// Edge length of the generated grid in cells
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Attempts before giving up on contradictions (1 means no retry)
pub const DEFAULT_ATTEMPTS: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Asset layout
/// Tile set used when no assets directory is given
pub const DEFAULT_ASSETS_DIR: &str = "assets/road";
/// Constraint file expected inside an assets directory
pub const CONSTRAINTS_FILE_NAME: &str = "constraints.toml";
/// File extension of tile bitmaps, named after their tile
pub const ASSET_EXTENSION: &str = "png";

// Output settings
/// Rendered image path when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "output.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
