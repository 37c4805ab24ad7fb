//! Grid generation errors.

use thiserror::Error;

use crate::coord::MAX_ZOOM;

/// Errors that can occur while building a tile grid.
///
/// All variants are raised during validation, before any tile is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// Minimum coordinates exceed the maximum ones.
    #[error(
        "Invalid bounds: minimum coordinates must not exceed maximum \
         (lon {min_lon}..{max_lon}, lat {min_lat}..{max_lat})"
    )]
    InvalidBounds {
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    },

    /// A bounding box component is NaN or infinite.
    #[error("Invalid bounds: {name} is not a finite number ({value})")]
    NonFiniteCoordinate { name: &'static str, value: f64 },

    /// A bounding box component lies outside the WGS84 coordinate range.
    #[error("Invalid bounds: {name} = {value} is outside {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Zoom level exceeds the supported maximum.
    #[error("Invalid zoom level: {0} (must be between 0 and {max})", max = MAX_ZOOM)]
    InvalidZoom(u8),
}
