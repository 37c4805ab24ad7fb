//! Coordinate type definitions

use serde::Serialize;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Zoom levels accepted by grid generation.
///
/// Above 30 the per-axis tile count no longer fits comfortably in the
/// index arithmetic used for enumeration.
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 30;

/// Tile index in the Web Mercator / Slippy Map system.
///
/// Indices are signed: the forward transform floors its result, so points
/// west of the antimeridian or north of the Mercator limit produce negative
/// values rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// X coordinate (east-west), 0 at the antimeridian
    pub x: i64,
    /// Y coordinate (north-south), 0 at north
    pub y: i64,
    /// Zoom level
    pub zoom: u8,
}

impl TileIndex {
    #[inline]
    pub fn new(x: i64, y: i64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// Number of tiles per axis at this tile's zoom level.
    #[inline]
    pub fn tiles_per_axis(&self) -> i64 {
        tiles_per_axis(self.zoom)
    }

    /// Returns true if the index addresses an existing tile of the pyramid.
    pub fn is_in_pyramid(&self) -> bool {
        let n = self.tiles_per_axis();
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }
}

/// Tiles per axis (`2^zoom`), saturating for zoom levels past 62.
#[inline]
pub fn tiles_per_axis(zoom: u8) -> i64 {
    1i64.checked_shl(zoom as u32)
        .filter(|n| *n > 0)
        .unwrap_or(i64::MAX)
}

/// Geographic footprint of a tile in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileBounds {
    pub lon_min: f64,
    pub lat_min: f64,
    pub lon_max: f64,
    pub lat_max: f64,
}

impl TileBounds {
    /// Smallest bounds enclosing both `self` and `other`.
    pub fn union(&self, other: &TileBounds) -> TileBounds {
        TileBounds {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }

    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Closed ring around the rectangle as `(lon, lat)` pairs.
    ///
    /// Starts at the southwest corner and runs counter-clockwise; the last
    /// point repeats the first.
    pub fn ring(&self) -> [(f64, f64); 5] {
        [
            (self.lon_min, self.lat_min),
            (self.lon_max, self.lat_min),
            (self.lon_max, self.lat_max),
            (self.lon_min, self.lat_max),
            (self.lon_min, self.lat_min),
        ]
    }
}
