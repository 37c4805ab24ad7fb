//! GeoJSON `FeatureCollection` writer.
//!
//! Features are streamed as they arrive, so memory use does not grow with
//! the grid size. Output follows RFC 7946: WGS84 coordinates as
//! `[lon, lat]`, exterior ring closed and counter-clockwise.

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use super::{LayerInfo, SinkError, TileSink};
use crate::grid::TileDescriptor;

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: &'a TileDescriptor,
    geometry: Polygon,
}

#[derive(Serialize)]
struct Polygon {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [[[f64; 2]; 5]; 1],
}

impl<'a> Feature<'a> {
    fn from_tile(tile: &'a TileDescriptor) -> Self {
        let ring = tile.ring().map(|(lon, lat)| [lon, lat]);
        Self {
            kind: "Feature",
            properties: tile,
            geometry: Polygon {
                kind: "Polygon",
                coordinates: [ring],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Open { features: u64 },
    Finished { features: u64 },
}

/// Sink writing a GeoJSON `FeatureCollection`.
///
/// The collection carries the layer name as a top-level `name` member, the
/// way common GIS exports do.
pub struct GeoJsonSink<W: Write> {
    writer: W,
    state: State,
}

impl<W: Write> GeoJsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state: State::Idle,
        }
    }

    /// Number of features written so far.
    pub fn features_written(&self) -> u64 {
        match self.state {
            State::Idle => 0,
            State::Open { features } | State::Finished { features } => features,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TileSink for GeoJsonSink<W> {
    fn begin_layer(&mut self, layer: &LayerInfo) -> Result<(), SinkError> {
        if self.state != State::Idle {
            return Err(SinkError::InvalidState("layer already started"));
        }

        self.writer
            .write_all(b"{\"type\":\"FeatureCollection\",\"name\":")?;
        serde_json::to_writer(&mut self.writer, &layer.name)?;
        self.writer.write_all(b",\"features\":[")?;

        debug!(layer = %layer.name, crs = layer.crs, "GeoJSON layer started");
        self.state = State::Open { features: 0 };
        Ok(())
    }

    fn add_feature(&mut self, tile: &TileDescriptor) -> Result<(), SinkError> {
        let features = match self.state {
            State::Open { features } => features,
            State::Idle => {
                return Err(SinkError::InvalidState("feature added before begin_layer"))
            }
            State::Finished { .. } => {
                return Err(SinkError::InvalidState("feature added after finish"))
            }
        };

        if features > 0 {
            self.writer.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.writer, &Feature::from_tile(tile))?;

        self.state = State::Open {
            features: features + 1,
        };
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        let features = match self.state {
            State::Open { features } => features,
            State::Idle => {
                return Err(SinkError::InvalidState("finish called before begin_layer"))
            }
            State::Finished { .. } => {
                return Err(SinkError::InvalidState("layer already finished"))
            }
        };

        self.writer.write_all(b"]}\n")?;
        self.writer.flush()?;

        debug!(features = features, "GeoJSON layer finished");
        self.state = State::Finished { features };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileIndex;
    use serde_json::Value;

    fn write_layer(tiles: &[TileDescriptor]) -> Value {
        let mut sink = GeoJsonSink::new(Vec::new());
        sink.begin_layer(&LayerInfo::new("grid_z1_test")).unwrap();
        for tile in tiles {
            sink.add_feature(tile).unwrap();
        }
        sink.finish().unwrap();

        serde_json::from_slice(&sink.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_collection_is_valid_json() {
        let doc = write_layer(&[]);
        assert_eq!(doc["type"], "FeatureCollection");
        assert_eq!(doc["name"], "grid_z1_test");
        assert_eq!(doc["features"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_feature_properties_and_geometry() {
        let tile = TileDescriptor::from_index(TileIndex::new(1, 0, 1));
        let doc = write_layer(&[tile]);

        let feature = &doc["features"][0];
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["properties"]["x"], 1);
        assert_eq!(feature["properties"]["y"], 0);
        assert_eq!(feature["properties"]["zoom"], 1);
        assert_eq!(feature["properties"]["lon_min"], 0.0);
        assert_eq!(feature["properties"]["lon_max"], 180.0);

        assert_eq!(feature["geometry"]["type"], "Polygon");
        let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[0][0], 0.0);
        assert_eq!(ring[0][1], 0.0);
        assert_eq!(ring[2][0], 180.0);
    }

    #[test]
    fn test_multiple_features_separated() {
        let tiles: Vec<_> = (0..4)
            .map(|x| TileDescriptor::from_index(TileIndex::new(x, 2, 2)))
            .collect();
        let doc = write_layer(&tiles);

        let features = doc["features"].as_array().unwrap();
        assert_eq!(features.len(), 4);
        for (x, feature) in features.iter().enumerate() {
            assert_eq!(feature["properties"]["x"], x as i64);
        }
    }

    #[test]
    fn test_counts_features() {
        let mut sink = GeoJsonSink::new(Vec::new());
        sink.begin_layer(&LayerInfo::new("count")).unwrap();
        sink.add_feature(&TileDescriptor::from_index(TileIndex::new(0, 0, 0)))
            .unwrap();
        assert_eq!(sink.features_written(), 1);
        sink.finish().unwrap();
        assert_eq!(sink.features_written(), 1);
    }

    #[test]
    fn test_rejects_out_of_order_calls() {
        let mut sink = GeoJsonSink::new(Vec::new());
        let tile = TileDescriptor::from_index(TileIndex::new(0, 0, 0));

        assert!(matches!(
            sink.add_feature(&tile),
            Err(SinkError::InvalidState(_))
        ));
        assert!(matches!(sink.finish(), Err(SinkError::InvalidState(_))));

        sink.begin_layer(&LayerInfo::new("x")).unwrap();
        sink.finish().unwrap();
        assert!(matches!(
            sink.add_feature(&tile),
            Err(SinkError::InvalidState(_))
        ));
    }
}
