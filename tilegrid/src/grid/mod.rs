//! Tile grid enumeration.
//!
//! Turns a zoom level and a geographic bounding box into the rectangular set
//! of slippy tiles covering it. The computation is pure: [`generate_grid`]
//! validates its inputs and returns a [`TileGrid`], a cheap description of
//! the index ranges that can be iterated any number of times.
//!
//! # Row/column inversion
//!
//! Tile rows grow southward, so the box's *minimum* latitude maps to the
//! *maximum* row:
//!
//! ```text
//!            x_min          x_max
//!   max_lat  ┌───┬───┬───┬───┐  y_min
//!            │   │   │   │   │
//!            ├───┼───┼───┼───┤
//!            │   │   │   │   │
//!   min_lat  └───┴───┴───┴───┘  y_max
//!         min_lon          max_lon
//! ```

mod error;

pub use error::GridError;

use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use crate::coord::{
    latlon_to_tile, tile_to_bounds, tiles_per_axis, TileBounds, TileIndex, MAX_LON, MAX_ZOOM,
    MIN_LON,
};

const MIN_BOX_LAT: f64 = -90.0;
const MAX_BOX_LAT: f64 = 90.0;

/// Geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Creates a validated bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::NonFiniteCoordinate`] if any component is NaN or
    /// infinite, [`GridError::OutOfRange`] if a longitude lies outside
    /// `[-180, 180]` or a latitude outside `[-90, 90]`, and
    /// [`GridError::InvalidBounds`] if a minimum exceeds its maximum.
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Result<Self, GridError> {
        let bbox = Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Checks the box invariants.
    pub fn validate(&self) -> Result<(), GridError> {
        for (name, value) in [
            ("min_lon", self.min_lon),
            ("min_lat", self.min_lat),
            ("max_lon", self.max_lon),
            ("max_lat", self.max_lat),
        ] {
            if !value.is_finite() {
                return Err(GridError::NonFiniteCoordinate { name, value });
            }
        }

        // Mercator rows stop being monotonic past the poles
        for (name, value, min, max) in [
            ("min_lon", self.min_lon, MIN_LON, MAX_LON),
            ("min_lat", self.min_lat, MIN_BOX_LAT, MAX_BOX_LAT),
            ("max_lon", self.max_lon, MIN_LON, MAX_LON),
            ("max_lat", self.max_lat, MIN_BOX_LAT, MAX_BOX_LAT),
        ] {
            if !(min..=max).contains(&value) {
                return Err(GridError::OutOfRange {
                    name,
                    value,
                    min,
                    max,
                });
            }
        }

        if self.min_lat > self.max_lat || self.min_lon > self.max_lon {
            return Err(GridError::InvalidBounds {
                min_lon: self.min_lon,
                min_lat: self.min_lat,
                max_lon: self.max_lon,
                max_lat: self.max_lat,
            });
        }

        Ok(())
    }
}

/// A tile's index plus its geographic footprint.
///
/// Field names double as the attribute schema of emitted features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileDescriptor {
    pub x: i64,
    pub y: i64,
    pub zoom: u8,
    pub lon_min: f64,
    pub lat_min: f64,
    pub lon_max: f64,
    pub lat_max: f64,
}

impl TileDescriptor {
    /// Builds the descriptor for a tile index.
    pub fn from_index(tile: TileIndex) -> Self {
        let bounds = tile_to_bounds(tile.x, tile.y, tile.zoom);
        Self {
            x: tile.x,
            y: tile.y,
            zoom: tile.zoom,
            lon_min: bounds.lon_min,
            lat_min: bounds.lat_min,
            lon_max: bounds.lon_max,
            lat_max: bounds.lat_max,
        }
    }

    pub fn index(&self) -> TileIndex {
        TileIndex::new(self.x, self.y, self.zoom)
    }

    pub fn bounds(&self) -> TileBounds {
        TileBounds {
            lon_min: self.lon_min,
            lat_min: self.lat_min,
            lon_max: self.lon_max,
            lat_max: self.lat_max,
        }
    }

    /// Closed five-point polygon ring of the tile footprint.
    pub fn ring(&self) -> [(f64, f64); 5] {
        self.bounds().ring()
    }
}

/// The rectangular range of tiles covering a bounding box.
///
/// Holds only the index ranges; descriptors are computed on iteration.
/// Iterating twice yields the same sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    zoom: u8,
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
}

impl TileGrid {
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Column range, west to east.
    pub fn x_range(&self) -> RangeInclusive<i64> {
        self.x_min..=self.x_max
    }

    /// Row range, north to south.
    pub fn y_range(&self) -> RangeInclusive<i64> {
        self.y_min..=self.y_max
    }

    pub fn columns(&self) -> u64 {
        (self.x_max - self.x_min + 1) as u64
    }

    pub fn rows(&self) -> u64 {
        (self.y_max - self.y_min + 1) as u64
    }

    /// Number of tiles in the grid.
    pub fn len(&self) -> u64 {
        self.columns() * self.rows()
    }

    /// A grid always covers at least one tile.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates descriptors with `x` as the outer loop and `y` as the inner.
    pub fn iter(&self) -> TileGridIter {
        TileGridIter {
            grid: self.clone(),
            x: self.x_min,
            y: self.y_min,
            remaining: self.len(),
        }
    }

    /// Geographic extent covered by the whole grid.
    pub fn extent(&self) -> TileBounds {
        let nw = tile_to_bounds(self.x_min, self.y_min, self.zoom);
        let se = tile_to_bounds(self.x_max, self.y_max, self.zoom);
        nw.union(&se)
    }
}

impl<'a> IntoIterator for &'a TileGrid {
    type Item = TileDescriptor;
    type IntoIter = TileGridIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the descriptors of a [`TileGrid`].
#[derive(Debug, Clone)]
pub struct TileGridIter {
    grid: TileGrid,
    x: i64,
    y: i64,
    remaining: u64,
}

impl Iterator for TileGridIter {
    type Item = TileDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let tile = TileIndex::new(self.x, self.y, self.grid.zoom);

        if self.y == self.grid.y_max {
            self.y = self.grid.y_min;
            self.x += 1;
        } else {
            self.y += 1;
        }
        self.remaining -= 1;

        Some(TileDescriptor::from_index(tile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for TileGridIter {}

/// Computes the grid of tiles covering `bbox` at `zoom`.
///
/// The index ranges are clamped to the tile pyramid `[0, 2^zoom - 1]`, so a
/// box touching longitude 180 or reaching past the Mercator latitude limit
/// only yields tiles that exist. A box lying entirely beyond that limit
/// (e.g. latitudes 86 to 89) snaps to the first or last row.
///
/// # Errors
///
/// Fails before producing anything if the box is invalid (see
/// [`BoundingBox::validate`]) or `zoom` exceeds [`MAX_ZOOM`].
pub fn generate_grid(zoom: u8, bbox: &BoundingBox) -> Result<TileGrid, GridError> {
    bbox.validate()?;
    if zoom > MAX_ZOOM {
        return Err(GridError::InvalidZoom(zoom));
    }

    // Minimum latitude lands on the maximum row
    let south_west = latlon_to_tile(bbox.min_lat, bbox.min_lon, zoom);
    let north_east = latlon_to_tile(bbox.max_lat, bbox.max_lon, zoom);

    let last = tiles_per_axis(zoom) - 1;
    let grid = TileGrid {
        zoom,
        x_min: south_west.x.clamp(0, last),
        x_max: north_east.x.clamp(0, last),
        y_min: north_east.y.clamp(0, last),
        y_max: south_west.y.clamp(0, last),
    };

    debug!(
        zoom = zoom,
        x_min = grid.x_min,
        x_max = grid.x_max,
        y_min = grid.y_min,
        y_max = grid.y_max,
        tiles = grid.len(),
        "Tile grid computed"
    );

    Ok(grid)
}
