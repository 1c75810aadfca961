//! Command-line interface: load a constraint set, collapse a grid, save a PNG

use crate::algorithm::engine::WaveFunctionCollapse;
use crate::algorithm::rules::{AdjacencyRules, TileId};
use crate::io::configuration::{
    CONSTRAINTS_FILE_NAME, DEFAULT_ASSETS_DIR, DEFAULT_ATTEMPTS, DEFAULT_GRID_SIZE,
    DEFAULT_OUTPUT_PATH, DEFAULT_SEED,
};
use crate::io::constraints::ConstraintsSet;
use crate::io::error::{Result, WfcError};
use crate::io::image::{TileAtlas, export_grid_as_png};
use crate::io::progress::CollapseProgress;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate tile maps with wave function collapse"
)]
/// Command-line arguments for the generator
pub struct Cli {
    /// Directory holding constraints.toml and one PNG per tile
    #[arg(short = 'd', long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets: PathBuf,

    /// Path of the rendered PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Edge length of the grid in cells
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Collapse attempts before giving up on contradictions
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Print the collapsed grid as text
    #[arg(short, long)]
    pub print: bool,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Path of the constraint file inside the assets directory
    pub fn constraints_path(&self) -> PathBuf {
        self.assets.join(CONSTRAINTS_FILE_NAME)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Summary of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Name declared by the constraint set, if any
    pub set_name: Option<String>,
    /// Collapse attempts used, 1 when the first attempt succeeded
    pub attempts: usize,
    /// Where the image was written
    pub output: PathBuf,
    /// Text view of the grid when `--print` was given
    pub grid_text: Option<String>,
}

/// Runs the load → collapse → save pipeline for one set of arguments
pub struct Generator {
    cli: Cli,
}

impl Generator {
    /// Create a generator for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the constraint set, collapse the grid and write the image
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The constraint file cannot be read or is invalid
    /// - The grid size is out of range
    /// - Every collapse attempt ends in a contradiction
    /// - A tile asset cannot be loaded or the image cannot be written
    pub fn run(&self) -> Result<GenerationReport> {
        let constraints = ConstraintsSet::from_path(&self.cli.constraints_path())?;
        let rules = constraints.adjacency_rules()?;
        self.warn_asymmetries(&rules);

        let mut engine = WaveFunctionCollapse::new(rules, self.cli.size, self.cli.seed)?;

        let total = self.cli.size * self.cli.size;
        let mut progress = if self.cli.should_show_progress() {
            CollapseProgress::new(total)
        } else {
            CollapseProgress::hidden(total)
        };

        let attempts = engine
            .collapse_with_retries(self.cli.attempts, |attempt, step| {
                if !step.is_done() {
                    progress.record(attempt);
                }
            })
            .inspect_err(|_| progress.abandon())?;
        progress.finish();

        let grid_text = self
            .cli
            .print
            .then(|| engine.grid().display(engine.rules()).to_string());

        let mut atlas = TileAtlas::new(&self.cli.assets, engine.rules(), constraints.resolution);
        export_grid_as_png(engine.grid(), &mut atlas, &self.cli.output)?;

        Ok(GenerationReport {
            set_name: constraints.name,
            attempts,
            output: self.cli.output.clone(),
            grid_text,
        })
    }

    // Allow print for user feedback on suspicious rule tables
    #[allow(clippy::print_stderr)]
    fn warn_asymmetries(&self, rules: &AdjacencyRules) {
        if self.cli.quiet {
            return;
        }
        for asymmetry in rules.asymmetries() {
            let name = |tile: TileId| rules.name(tile).unwrap_or("?");
            eprintln!(
                "Warning: '{}' allows '{}' in direction {} but not the reverse",
                name(asymmetry.tile),
                name(asymmetry.neighbor),
                asymmetry.direction
            );
        }
    }
}

/// User-facing failure line naming the pipeline stage that failed
pub fn failure_message(error: &WfcError) -> String {
    let stage = match error {
        WfcError::Contradiction(_) => "collapse",
        WfcError::InvalidParameter { .. } => "configure",
        WfcError::ConfigurationParse { .. } | WfcError::InvalidConfiguration { .. } => {
            "load constraints"
        }
        WfcError::FileSystem { operation, .. } if operation.contains("constraints") => {
            "load constraints"
        }
        WfcError::AssetLoad { .. }
        | WfcError::InvalidAsset { .. }
        | WfcError::IncompleteGrid { .. }
        | WfcError::ImageExport { .. }
        | WfcError::FileSystem { .. } => "save",
    };
    format!("Failed to {stage}: {error}")
}
