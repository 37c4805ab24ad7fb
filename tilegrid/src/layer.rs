//! Grid layer creation.
//!
//! Ties grid generation to an output sink: validates the request, computes
//! the grid, then streams one polygon feature per tile into the sink.

use thiserror::Error;
use tracing::{debug, info};

use crate::coord::TileBounds;
use crate::grid::{generate_grid, BoundingBox, GridError};
use crate::sink::{LayerInfo, SinkError, TileSink};

/// Errors that can occur while creating a grid layer.
#[derive(Debug, Error)]
pub enum LayerError {
    /// The grid request was rejected. Nothing was sent to the sink.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The sink failed while receiving the layer.
    #[error("Failed to write layer: {0}")]
    Sink(#[from] SinkError),
}

/// Outcome of a successful layer creation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSummary {
    /// Name the layer was created under.
    pub name: String,
    /// Number of tile features emitted.
    pub tile_count: u64,
    /// Geographic extent of all emitted tiles.
    pub extent: TileBounds,
}

/// Creates a grid layer under its conventional name.
///
/// See [`create_named_grid_layer`].
pub fn create_grid_layer<S: TileSink>(
    zoom: u8,
    bbox: &BoundingBox,
    sink: S,
) -> Result<LayerSummary, LayerError> {
    create_named_grid_layer(LayerInfo::for_grid(zoom, bbox), zoom, bbox, sink)
}

/// Generates the tile grid for `bbox` at `zoom` and emits it into `sink`.
///
/// The request is validated before the sink is touched, so an invalid box
/// leaves the sink untouched.
pub fn create_named_grid_layer<S: TileSink>(
    layer: LayerInfo,
    zoom: u8,
    bbox: &BoundingBox,
    mut sink: S,
) -> Result<LayerSummary, LayerError> {
    let grid = generate_grid(zoom, bbox)?;

    debug!(
        layer = %layer.name,
        zoom = zoom,
        columns = grid.columns(),
        rows = grid.rows(),
        "Creating grid layer"
    );

    sink.begin_layer(&layer)?;
    let mut tile_count = 0u64;
    for tile in &grid {
        sink.add_feature(&tile)?;
        tile_count += 1;
    }
    sink.finish()?;

    info!(layer = %layer.name, tiles = tile_count, "Grid created: {}", layer.name);

    Ok(LayerSummary {
        name: layer.name,
        tile_count,
        extent: grid.extent(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileDescriptor;
    use crate::sink::MemoryLayer;

    /// Sink that fails after a fixed number of features.
    struct FailingSink {
        accept: usize,
        seen: usize,
    }

    impl TileSink for FailingSink {
        fn begin_layer(&mut self, _: &LayerInfo) -> Result<(), SinkError> {
            Ok(())
        }

        fn add_feature(&mut self, _: &TileDescriptor) -> Result<(), SinkError> {
            if self.seen == self.accept {
                return Err(SinkError::Io(std::io::Error::other("disk full")));
            }
            self.seen += 1;
            Ok(())
        }

        fn finish(&mut self) -> Result<(), SinkError> {
            Ok(())
        }
    }

    #[test]
    fn test_creates_layer_in_memory() {
        let bbox = BoundingBox::new(5.0, 50.0, 10.0, 55.0).unwrap();
        let mut layer = MemoryLayer::new();

        let summary = create_grid_layer(6, &bbox, &mut layer).unwrap();

        assert_eq!(summary.name, "grid_z6_50.000_5.000");
        assert_eq!(layer.name(), Some("grid_z6_50.000_5.000"));
        assert!(layer.is_finished());
        assert_eq!(summary.tile_count, layer.feature_count() as u64);
        assert_eq!(Some(summary.extent), layer.extent());

        let grid = generate_grid(6, &bbox).unwrap();
        assert_eq!(layer.features(), grid.iter().collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_invalid_bounds_leave_sink_untouched() {
        let bbox = BoundingBox {
            min_lon: 10.0,
            min_lat: 50.0,
            max_lon: 5.0,
            max_lat: 60.0,
        };
        let mut layer = MemoryLayer::new();

        let result = create_grid_layer(5, &bbox, &mut layer);

        assert!(matches!(
            result,
            Err(LayerError::Grid(GridError::InvalidBounds { .. }))
        ));
        assert!(layer.info().is_none());
        assert_eq!(layer.feature_count(), 0);
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let bbox = BoundingBox::new(-10.0, -10.0, 10.0, 10.0).unwrap();
        let sink = FailingSink { accept: 2, seen: 0 };

        let result = create_grid_layer(4, &bbox, sink);
        assert!(matches!(result, Err(LayerError::Sink(SinkError::Io(_)))));
    }

    #[test]
    fn test_named_layer() {
        let bbox = BoundingBox::new(0.0, 0.5, 1.0, 1.0).unwrap();
        let mut layer = MemoryLayer::new();

        let summary =
            create_named_grid_layer(LayerInfo::new("custom"), 3, &bbox, &mut layer).unwrap();
        assert_eq!(summary.name, "custom");
        assert_eq!(summary.tile_count, 1);
    }
}
