//! In-memory layer sink.

use tracing::trace;

use super::{LayerInfo, SinkError, TileSink};
use crate::coord::TileBounds;
use crate::grid::TileDescriptor;

/// Polygon layer held in memory.
///
/// Collects every feature it receives and keeps the layer extent up to date
/// as features arrive.
#[derive(Debug, Default, Clone)]
pub struct MemoryLayer {
    info: Option<LayerInfo>,
    features: Vec<TileDescriptor>,
    extent: Option<TileBounds>,
    finished: bool,
}

impl MemoryLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer description, once `begin_layer` has been called.
    pub fn info(&self) -> Option<&LayerInfo> {
        self.info.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.info.as_ref().map(|info| info.name.as_str())
    }

    pub fn features(&self) -> &[TileDescriptor] {
        &self.features
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Union of all feature bounds, `None` while the layer is empty.
    pub fn extent(&self) -> Option<TileBounds> {
        self.extent
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_features(self) -> Vec<TileDescriptor> {
        self.features
    }
}

impl TileSink for MemoryLayer {
    fn begin_layer(&mut self, layer: &LayerInfo) -> Result<(), SinkError> {
        if self.info.is_some() {
            return Err(SinkError::InvalidState("layer already started"));
        }
        self.info = Some(layer.clone());
        Ok(())
    }

    fn add_feature(&mut self, tile: &TileDescriptor) -> Result<(), SinkError> {
        if self.info.is_none() {
            return Err(SinkError::InvalidState("feature added before begin_layer"));
        }
        if self.finished {
            return Err(SinkError::InvalidState("feature added after finish"));
        }

        let bounds = tile.bounds();
        self.extent = Some(match self.extent {
            Some(extent) => extent.union(&bounds),
            None => bounds,
        });
        self.features.push(*tile);

        trace!(x = tile.x, y = tile.y, zoom = tile.zoom, "Feature added");
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        if self.info.is_none() {
            return Err(SinkError::InvalidState("finish called before begin_layer"));
        }
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileIndex;

    fn tile(x: i64, y: i64, zoom: u8) -> TileDescriptor {
        TileDescriptor::from_index(TileIndex::new(x, y, zoom))
    }

    #[test]
    fn test_collects_features_and_extent() {
        let mut layer = MemoryLayer::new();
        layer.begin_layer(&LayerInfo::new("test")).unwrap();
        assert!(layer.extent().is_none());

        layer.add_feature(&tile(0, 0, 1)).unwrap();
        layer.add_feature(&tile(1, 1, 1)).unwrap();
        layer.finish().unwrap();

        assert_eq!(layer.name(), Some("test"));
        assert_eq!(layer.feature_count(), 2);
        assert!(layer.is_finished());

        let extent = layer.extent().unwrap();
        assert_eq!(extent.lon_min, -180.0);
        assert_eq!(extent.lon_max, 180.0);
        assert!(extent.lat_max > 85.0);
        assert!(extent.lat_min < -85.0);
    }

    #[test]
    fn test_rejects_feature_before_begin() {
        let mut layer = MemoryLayer::new();
        let result = layer.add_feature(&tile(0, 0, 0));
        assert!(matches!(result, Err(SinkError::InvalidState(_))));
    }

    #[test]
    fn test_rejects_feature_after_finish() {
        let mut layer = MemoryLayer::new();
        layer.begin_layer(&LayerInfo::new("test")).unwrap();
        layer.finish().unwrap();

        let result = layer.add_feature(&tile(0, 0, 0));
        assert!(matches!(result, Err(SinkError::InvalidState(_))));
    }

    #[test]
    fn test_rejects_second_begin() {
        let mut layer = MemoryLayer::new();
        layer.begin_layer(&LayerInfo::new("a")).unwrap();
        let result = layer.begin_layer(&LayerInfo::new("b"));
        assert!(matches!(result, Err(SinkError::InvalidState(_))));
        assert_eq!(layer.name(), Some("a"));
    }
}
