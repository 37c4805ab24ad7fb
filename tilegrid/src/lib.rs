//! Tilegrid - Web Mercator tile grids for geographic bounding boxes
//!
//! Computes the rectangular set of slippy-map tiles (the OpenStreetMap /
//! Google XYZ scheme) covering a bounding box at a zoom level, and
//! materializes each tile as a polygon feature carrying its index and
//! geographic bounds.
//!
//! # Layers
//!
//! ```text
//! coord   lat/lon ⇄ tile index transforms
//! grid    bounding box → TileGrid (restartable sequence of descriptors)
//! sink    TileSink trait + MemoryLayer / GeoJsonSink adapters
//! layer   generate + emit into a sink
//! ```
//!
//! # Example
//!
//! ```
//! use tilegrid::grid::{generate_grid, BoundingBox};
//! use tilegrid::layer::create_grid_layer;
//! use tilegrid::sink::MemoryLayer;
//!
//! let bbox = BoundingBox::new(-180.0, -85.0, 180.0, 85.0)?;
//! let grid = generate_grid(0, &bbox)?;
//! assert_eq!(grid.len(), 1);
//!
//! let mut layer = MemoryLayer::new();
//! let summary = create_grid_layer(0, &bbox, &mut layer)?;
//! assert_eq!(summary.tile_count, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod coord;
pub mod grid;
pub mod layer;
pub mod logging;
pub mod sink;

/// Crate version, as reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
