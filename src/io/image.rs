//! PNG export by compositing per-tile bitmaps onto a transparent canvas

use crate::algorithm::rules::{AdjacencyRules, TileId};
use crate::io::configuration::ASSET_EXTENSION;
use crate::io::error::{Result, WfcError, invalid_parameter};
use crate::spatial::Grid;
use image::{ImageFormat, RgbaImage, imageops};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

/// Tile bitmaps decoded on first use
///
/// Each tile's asset is `<assets_dir>/<tile name>.png` and must be a square
/// of `resolution` pixels.
pub struct TileAtlas<'a> {
    assets_dir: PathBuf,
    rules: &'a AdjacencyRules,
    resolution: u32,
    loaded: HashMap<TileId, RgbaImage>,
}

impl<'a> TileAtlas<'a> {
    /// Create an atlas reading from `assets_dir`
    pub fn new(assets_dir: &Path, rules: &'a AdjacencyRules, resolution: u32) -> Self {
        Self {
            assets_dir: assets_dir.to_path_buf(),
            rules,
            resolution,
            loaded: HashMap::new(),
        }
    }

    /// Edge length of a tile in pixels
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Path of the bitmap for `tile`
    pub fn asset_path(&self, tile: TileId) -> PathBuf {
        asset_path(&self.assets_dir, self.rules, tile)
    }

    /// Bitmap for `tile`, decoding it the first time
    ///
    /// # Errors
    ///
    /// Returns an error if the asset is missing, cannot be decoded, or is not
    /// a square of the configured resolution
    pub fn tile(&mut self, tile: TileId) -> Result<&RgbaImage> {
        match self.loaded.entry(tile) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let path = asset_path(&self.assets_dir, self.rules, tile);
                Ok(entry.insert(load_bitmap(path, self.resolution)?))
            }
        }
    }
}

fn asset_path(assets_dir: &Path, rules: &AdjacencyRules, tile: TileId) -> PathBuf {
    let name = rules.name(tile).unwrap_or_default();
    assets_dir.join(format!("{name}.{ASSET_EXTENSION}"))
}

fn load_bitmap(path: PathBuf, resolution: u32) -> Result<RgbaImage> {
    let bitmap = image::open(&path)
        .map_err(|e| WfcError::AssetLoad {
            path: path.clone(),
            source: e,
        })?
        .to_rgba8();

    if bitmap.width() != resolution || bitmap.height() != resolution {
        return Err(WfcError::InvalidAsset {
            path,
            reason: format!(
                "expected {resolution}x{resolution} pixels, found {}x{}",
                bitmap.width(),
                bitmap.height()
            ),
        });
    }
    Ok(bitmap)
}

/// Byte length of an RGBA canvas with the given edge, if it is addressable
fn canvas_bytes(edge: u32) -> Option<usize> {
    u64::from(edge)
        .checked_mul(u64::from(edge))
        .and_then(|pixels| pixels.checked_mul(4))
        .and_then(|bytes| usize::try_from(bytes).ok())
}

/// Composite a fully collapsed grid into an image
///
/// Each cell's tile is alpha-blended over a transparent canvas at
/// `(x * resolution, y * resolution)`.
///
/// # Errors
///
/// Returns an error if:
/// - Some cell is not collapsed
/// - The canvas `size * resolution` pixels wide is too large to allocate
/// - A tile asset cannot be loaded or has the wrong size
pub fn render_grid(grid: &Grid, atlas: &mut TileAtlas<'_>) -> Result<RgbaImage> {
    if !grid.is_complete() {
        return Err(WfcError::IncompleteGrid {
            collapsed: grid.collapsed_count(),
            total: grid.len(),
        });
    }

    let resolution = atlas.resolution();
    let edge = u32::try_from(grid.size())
        .ok()
        .and_then(|size| size.checked_mul(resolution))
        .filter(|&edge| canvas_bytes(edge).is_some())
        .ok_or_else(|| {
            invalid_parameter(
                "resolution",
                &resolution,
                &format!("a {0}x{0} grid of such tiles exceeds the canvas limit", grid.size()),
            )
        })?;
    let mut canvas = RgbaImage::new(edge, edge);

    for cell in grid.iter() {
        let Some(tile) = cell.collapsed_tile() else {
            continue;
        };
        let position = cell.position();
        let bitmap = atlas.tile(tile)?;
        imageops::overlay(
            &mut canvas,
            bitmap,
            i64::from(position.x) * i64::from(resolution),
            i64::from(position.y) * i64::from(resolution),
        );
    }

    Ok(canvas)
}

/// Render the grid and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_grid`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    atlas: &mut TileAtlas<'_>,
    output_path: &Path,
) -> Result<()> {
    let canvas = render_grid(grid, atlas)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| WfcError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| WfcError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
