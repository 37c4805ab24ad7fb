//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and Web Mercator slippy tile indices.
//!
//! Neither transform validates its input. Latitudes at ±90° sit on the
//! Mercator singularity and produce meaningless indices; keeping latitude
//! inside [`MIN_LAT`]..=[`MAX_LAT`] is the caller's job.

mod types;

pub use types::{
    tiles_per_axis, TileBounds, TileIndex, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON,
    MIN_ZOOM,
};

use std::f64::consts::PI;

/// Converts geographic coordinates to a tile index.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (conventionally -85.05112878 to 85.05112878)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level
///
/// Indices are floored, not truncated toward zero, so coordinates just
/// outside the pyramid yield -1 rather than folding onto tile 0.
#[inline]
pub fn latlon_to_tile(lat: f64, lon: f64, zoom: u8) -> TileIndex {
    let n = 2.0_f64.powi(zoom as i32);

    let x = ((lon + 180.0) / 360.0 * n).floor() as i64;

    // asinh(tan φ) == ln(tan φ + sec φ)
    let lat_rad = lat.to_radians();
    let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as i64;

    TileIndex { x, y, zoom }
}

/// Longitude of the western edge of tile column `x`.
#[inline]
fn tile_x_to_lon(x: i64, n: f64) -> f64 {
    x as f64 / n * 360.0 - 180.0
}

/// Latitude of the northern edge of tile row `y` (inverse Web Mercator).
#[inline]
fn tile_y_to_lat(y: i64, n: f64) -> f64 {
    let lat_rad = (PI * (1.0 - 2.0 * y as f64 / n)).sinh().atan();
    lat_rad.to_degrees()
}

/// Converts a tile index to its geographic bounding rectangle.
///
/// The northwest corner comes from `(x, y)` and the southeast corner from
/// `(x + 1, y + 1)`; latitude decreases as `y` grows.
#[inline]
pub fn tile_to_bounds(x: i64, y: i64, zoom: u8) -> TileBounds {
    let n = 2.0_f64.powi(zoom as i32);

    TileBounds {
        lon_min: tile_x_to_lon(x, n),
        lat_min: tile_y_to_lat(y + 1, n),
        lon_max: tile_x_to_lon(x + 1, n),
        lat_max: tile_y_to_lat(y, n),
    }
}

/// Converts a tile index back to geographic coordinates.
///
/// Returns the latitude/longitude of the tile's northwest corner.
#[inline]
pub fn tile_to_lat_lon(tile: &TileIndex) -> (f64, f64) {
    let n = 2.0_f64.powi(tile.zoom as i32);
    (tile_y_to_lat(tile.y, n), tile_x_to_lon(tile.x, n))
}
