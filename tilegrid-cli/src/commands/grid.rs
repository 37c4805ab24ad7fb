//! Grid command - write the tile grid covering a bounding box as GeoJSON.

use clap::Args;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tilegrid::config::ConfigFile;
use tilegrid::grid::BoundingBox;
use tilegrid::layer::{create_named_grid_layer, LayerError, LayerSummary};
use tilegrid::sink::{GeoJsonSink, LayerInfo, TileSink};
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the grid command.
#[derive(Debug, Args)]
pub struct GridArgs {
    /// Western edge in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub min_lon: f64,

    /// Southern edge in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub min_lat: f64,

    /// Eastern edge in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub max_lon: f64,

    /// Northern edge in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub max_lat: f64,

    /// Zoom level (defaults to grid.default_zoom from config.ini)
    #[arg(long)]
    pub zoom: Option<u8>,

    /// Output file, '-' for stdout (defaults to <output dir>/<layer name>.geojson)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Layer name (defaults to grid_z<zoom>_<min_lat>_<min_lon>)
    #[arg(long)]
    pub name: Option<String>,
}

/// Where the layer is written.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Resolve the output target from the CLI argument and config.
pub fn resolve_output(arg: Option<&Path>, layer_name: &str, config: &ConfigFile) -> OutputTarget {
    match arg {
        Some(path) if path == Path::new("-") => OutputTarget::Stdout,
        Some(path) => OutputTarget::File(path.to_path_buf()),
        None => OutputTarget::File(
            config
                .output
                .directory
                .join(format!("{}.geojson", layer_name)),
        ),
    }
}

/// Run the grid command.
pub fn run(args: GridArgs, runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("grid");
    let config = runner.config();

    let zoom = args.zoom.unwrap_or(config.grid.default_zoom);
    let bbox = BoundingBox::new(args.min_lon, args.min_lat, args.max_lon, args.max_lat)
        .map_err(LayerError::from)?;

    let layer = match args.name {
        Some(name) => LayerInfo::new(name),
        None => LayerInfo::for_grid(zoom, &bbox),
    };

    match resolve_output(args.output.as_deref(), &layer.name, config) {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let summary = write_layer(layer, zoom, &bbox, stdout.lock())?;
            eprintln!("Grid created: {} ({} tiles)", summary.name, summary.tile_count);
        }
        OutputTarget::File(path) => {
            let file = create_output(&path)?;
            info!(path = %path.display(), "Writing GeoJSON layer");
            let summary = write_layer(layer, zoom, &bbox, BufWriter::new(file))?;
            println!("Grid created: {} ({} tiles)", summary.name, summary.tile_count);
            println!("  Zoom: {}", zoom);
            println!(
                "  Extent: {:.6}, {:.6} → {:.6}, {:.6}",
                summary.extent.lon_min,
                summary.extent.lat_min,
                summary.extent.lon_max,
                summary.extent.lat_max
            );
            println!("  Output: {}", path.display());
        }
    }

    Ok(())
}

fn write_layer<W: io::Write>(
    layer: LayerInfo,
    zoom: u8,
    bbox: &BoundingBox,
    writer: W,
) -> Result<LayerSummary, CliError> {
    write_layer_to(layer, zoom, bbox, GeoJsonSink::new(writer))
}

fn write_layer_to<S: TileSink>(
    layer: LayerInfo,
    zoom: u8,
    bbox: &BoundingBox,
    sink: S,
) -> Result<LayerSummary, CliError> {
    Ok(create_named_grid_layer(layer, zoom, bbox, sink)?)
}

/// Create the output file, including missing parent directories.
fn create_output(path: &Path) -> Result<File, CliError> {
    let to_error = |error: io::Error| CliError::Output {
        path: path.to_path_buf(),
        error,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    File::create(path).map_err(to_error)
}
