//! Output sinks for tile grid layers.
//!
//! Grid generation is pure; materializing the grid as a polygon layer is
//! delegated to a [`TileSink`]. A sink receives the layer description once,
//! then one feature per tile, then a final `finish()` call.
//!
//! # Sinks
//!
//! - [`MemoryLayer`] - keeps features in memory and tracks the layer extent
//! - [`GeoJsonSink`] - streams a GeoJSON `FeatureCollection` to any writer
//!
//! # Lifecycle
//!
//! ```text
//! begin_layer(&LayerInfo) → add_feature(&TileDescriptor) × N → finish()
//! ```

mod geojson;
mod memory;

pub use geojson::GeoJsonSink;
pub use memory::MemoryLayer;

use thiserror::Error;

use crate::grid::{BoundingBox, TileDescriptor};

/// Coordinate reference system of every emitted layer.
pub const LAYER_CRS: &str = "EPSG:4326";

/// Attribute value type of a layer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Int,
    Double,
}

/// A named attribute column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub field_type: FieldType,
}

/// Attribute schema carried by each tile feature, in record order.
pub const TILE_FIELDS: [FieldDef; 7] = [
    FieldDef {
        name: "x",
        field_type: FieldType::Int,
    },
    FieldDef {
        name: "y",
        field_type: FieldType::Int,
    },
    FieldDef {
        name: "zoom",
        field_type: FieldType::Int,
    },
    FieldDef {
        name: "lon_min",
        field_type: FieldType::Double,
    },
    FieldDef {
        name: "lat_min",
        field_type: FieldType::Double,
    },
    FieldDef {
        name: "lon_max",
        field_type: FieldType::Double,
    },
    FieldDef {
        name: "lat_max",
        field_type: FieldType::Double,
    },
];

/// Description of the polygon layer a sink is about to receive.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInfo {
    pub name: String,
    pub crs: &'static str,
    pub fields: &'static [FieldDef],
}

impl LayerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            crs: LAYER_CRS,
            fields: &TILE_FIELDS,
        }
    }

    /// Layer with the conventional name for a grid request.
    pub fn for_grid(zoom: u8, bbox: &BoundingBox) -> Self {
        Self::new(default_layer_name(zoom, bbox))
    }
}

/// Conventional layer name: `grid_z{zoom}_{min_lat}_{min_lon}` with three
/// decimals.
pub fn default_layer_name(zoom: u8, bbox: &BoundingBox) -> String {
    format!("grid_z{}_{:.3}_{:.3}", zoom, bbox.min_lat, bbox.min_lon)
}

/// Errors raised by sinks.
#[derive(Debug, Error)]
pub enum SinkError {
    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a feature.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A lifecycle method was called out of order.
    #[error("Invalid sink state: {0}")]
    InvalidState(&'static str),
}

/// Consumer of tile descriptors that materializes them as a polygon layer.
pub trait TileSink {
    /// Starts a new layer. Called exactly once, before any feature.
    fn begin_layer(&mut self, layer: &LayerInfo) -> Result<(), SinkError>;

    /// Adds one tile as a polygon feature.
    fn add_feature(&mut self, tile: &TileDescriptor) -> Result<(), SinkError>;

    /// Completes the layer. No features may follow.
    fn finish(&mut self) -> Result<(), SinkError>;
}

impl<S: TileSink + ?Sized> TileSink for &mut S {
    fn begin_layer(&mut self, layer: &LayerInfo) -> Result<(), SinkError> {
        (**self).begin_layer(layer)
    }

    fn add_feature(&mut self, tile: &TileDescriptor) -> Result<(), SinkError> {
        (**self).add_feature(tile)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        (**self).finish()
    }
}

impl<S: TileSink + ?Sized> TileSink for Box<S> {
    fn begin_layer(&mut self, layer: &LayerInfo) -> Result<(), SinkError> {
        (**self).begin_layer(layer)
    }

    fn add_feature(&mut self, tile: &TileDescriptor) -> Result<(), SinkError> {
        (**self).add_feature(tile)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        (**self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layer_name() {
        let bbox = BoundingBox::new(-46.6333, -23.5504, -46.5, -23.4).unwrap();
        assert_eq!(default_layer_name(14, &bbox), "grid_z14_-23.550_-46.633");
    }

    #[test]
    fn test_layer_info_schema() {
        let layer = LayerInfo::new("tiles");
        assert_eq!(layer.crs, "EPSG:4326");

        let names: Vec<_> = layer.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["x", "y", "zoom", "lon_min", "lat_min", "lon_max", "lat_max"]
        );
        assert!(layer.fields[..3]
            .iter()
            .all(|f| f.field_type == FieldType::Int));
        assert!(layer.fields[3..]
            .iter()
            .all(|f| f.field_type == FieldType::Double));
    }

    #[test]
    fn test_sink_error_display() {
        let err = SinkError::InvalidState("feature added before begin_layer");
        assert_eq!(
            err.to_string(),
            "Invalid sink state: feature added before begin_layer"
        );
    }
}
