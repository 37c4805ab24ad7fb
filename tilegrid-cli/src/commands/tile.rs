//! Tile lookup commands - single coordinate conversions.

use clap::Args;
use tilegrid::coord::{
    latlon_to_tile, tile_to_bounds, tiles_per_axis, MAX_LAT, MAX_ZOOM, MIN_LAT,
};
use tracing::warn;

use crate::error::CliError;

/// Arguments for the tile command.
#[derive(Debug, Args)]
pub struct TileArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Zoom level
    #[arg(long)]
    pub zoom: u8,
}

/// Arguments for the bounds command.
#[derive(Debug, Args)]
pub struct BoundsArgs {
    /// Tile column
    #[arg(long)]
    pub x: i64,

    /// Tile row
    #[arg(long)]
    pub y: i64,

    /// Zoom level
    #[arg(long)]
    pub zoom: u8,
}

/// Run the tile command: print the tile containing a point.
pub fn run_tile(args: TileArgs) -> Result<(), CliError> {
    check_zoom(args.zoom)?;

    if !(MIN_LAT..=MAX_LAT).contains(&args.lat) {
        warn!(
            lat = args.lat,
            "Latitude outside the Web Mercator range; tile index is off the map"
        );
    }

    let tile = latlon_to_tile(args.lat, args.lon, args.zoom);
    println!("x={} y={} zoom={}", tile.x, tile.y, tile.zoom);
    Ok(())
}

/// Run the bounds command: print the geographic bounds of a tile.
pub fn run_bounds(args: BoundsArgs) -> Result<(), CliError> {
    check_zoom(args.zoom)?;

    let n = tiles_per_axis(args.zoom);
    if !(0..n).contains(&args.x) || !(0..n).contains(&args.y) {
        return Err(CliError::InvalidArgument(format!(
            "tile {}/{} does not exist at zoom {} (x and y must be between 0 and {})",
            args.x,
            args.y,
            args.zoom,
            n - 1
        )));
    }

    let bounds = tile_to_bounds(args.x, args.y, args.zoom);
    println!(
        "lon_min={} lat_min={} lon_max={} lat_max={}",
        bounds.lon_min, bounds.lat_min, bounds.lon_max, bounds.lat_max
    );
    Ok(())
}

fn check_zoom(zoom: u8) -> Result<(), CliError> {
    if zoom > MAX_ZOOM {
        return Err(CliError::InvalidArgument(format!(
            "zoom level {} exceeds maximum {}",
            zoom, MAX_ZOOM
        )));
    }
    Ok(())
}
