use crate::{
    layers::base::{LayerKind, LayerTrait},
    MapError, Result,
};

use crate::prelude::HashMap;

/// Manages the layer set of a map, preserving insertion order.
///
/// The tile layer is added once at map construction and stays first; zone
/// layers come and go behind it as the widget refreshes.
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Layer IDs in insertion order
    order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            order: Vec::new(),
        }
    }

    /// Adds a layer. Layer IDs must be unique within one map.
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(MapError::Layer(format!("duplicate layer id: {layer_id}")));
        }

        self.layers.insert(layer_id.clone(), layer);
        self.order.push(layer_id);
        Ok(())
    }

    /// Removes a layer by ID, returning it if it was attached.
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Keeps only the layers matching `keep`, returning how many were
    /// removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&dyn LayerTrait) -> bool,
    {
        let dropped: Vec<String> = self
            .order
            .iter()
            .filter(|id| {
                self.layers
                    .get(*id)
                    .map(|layer| !keep(layer.as_ref()))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();

        for id in &dropped {
            self.layers.remove(id);
        }
        self.order.retain(|id| self.layers.contains_key(id));

        dropped.len()
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&(dyn LayerTrait + 'static)> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Gets all layers in insertion order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Counts layers of the given kind
    pub fn count_by_kind(&self, kind: LayerKind) -> usize {
        self.layers.values().filter(|l| l.kind() == kind).count()
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLngBounds;

    struct StubLayer {
        id: String,
        kind: LayerKind,
    }

    impl StubLayer {
        fn new(id: &str, kind: LayerKind) -> Box<dyn LayerTrait> {
            Box::new(Self {
                id: id.to_string(),
                kind,
            })
        }
    }

    impl LayerTrait for StubLayer {
        fn id(&self) -> &str {
            &self.id
        }

        fn kind(&self) -> LayerKind {
            self.kind
        }

        fn bounds(&self) -> Option<LatLngBounds> {
            None
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    #[test]
    fn test_add_preserves_order() {
        let mut manager = LayerManager::new();
        manager.add_layer(StubLayer::new("base", LayerKind::Tile)).unwrap();
        manager.add_layer(StubLayer::new("z1", LayerKind::Zone)).unwrap();
        manager.add_layer(StubLayer::new("z2", LayerKind::Zone)).unwrap();

        let ids: Vec<&str> = manager.layers().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["base", "z1", "z2"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut manager = LayerManager::new();
        manager.add_layer(StubLayer::new("z1", LayerKind::Zone)).unwrap();
        assert!(manager.add_layer(StubLayer::new("z1", LayerKind::Zone)).is_err());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_retain_drops_zones_keeps_tile() {
        let mut manager = LayerManager::new();
        manager.add_layer(StubLayer::new("base", LayerKind::Tile)).unwrap();
        manager.add_layer(StubLayer::new("z1", LayerKind::Zone)).unwrap();
        manager.add_layer(StubLayer::new("z2", LayerKind::Zone)).unwrap();

        let removed = manager.retain(|l| l.kind() == LayerKind::Tile);
        assert_eq!(removed, 2);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.count_by_kind(LayerKind::Tile), 1);
        assert_eq!(manager.count_by_kind(LayerKind::Zone), 0);
    }

    #[test]
    fn test_remove_layer() {
        let mut manager = LayerManager::new();
        manager.add_layer(StubLayer::new("z1", LayerKind::Zone)).unwrap();
        assert!(manager.remove_layer("z1").is_some());
        assert!(manager.remove_layer("z1").is_none());
        assert!(manager.is_empty());
    }
}
