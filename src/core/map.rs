use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::{
        base::{LayerKind, LayerTrait},
        manager::LayerManager,
    },
    Result,
};

#[derive(Debug, Clone)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        // The default global view the widget opens with
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 2.0,
            min_zoom: 0.0,
            max_zoom: 19.0,
        }
    }
}

/// A map instance: view state plus the layer set it owns exclusively.
///
/// Created once in the widget's `init`, mutated on every `update_view`,
/// and dropped in `destroy`.
pub struct Map {
    options: MapOptions,
    center: LatLng,
    zoom: f64,
    width_px: u32,
    height_px: u32,
    layers: LayerManager,
}

impl Map {
    pub fn new(options: MapOptions, width_px: u32, height_px: u32) -> Self {
        let center = options.center;
        let zoom = options.zoom;
        Self {
            options,
            center,
            zoom,
            width_px,
            height_px,
            layers: LayerManager::new(),
        }
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn size_px(&self) -> (u32, u32) {
        (self.width_px, self.height_px)
    }

    /// Moves the view to the given center and zoom, clamped to the
    /// configured zoom range.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = center;
        self.zoom = zoom.clamp(self.options.min_zoom, self.options.max_zoom);
    }

    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    /// Removes every attached layer that is not a base tile layer,
    /// returning how many were dropped. Base-ness is a kind check.
    pub fn remove_zone_layers(&mut self) -> usize {
        self.layers.retain(|layer| layer.kind() == LayerKind::Tile)
    }

    /// Recenters and rezooms the view so `bounds` fits inside the map's
    /// pixel size: the largest whole zoom at which the projected span
    /// still fits.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        let sw = bounds.south_west.project(0.0);
        let ne = bounds.north_east.project(0.0);

        let span_x = (ne.x - sw.x).abs().max(f64::EPSILON);
        let span_y = (sw.y - ne.y).abs().max(f64::EPSILON);

        let zoom_x = (self.width_px as f64 / span_x).log2();
        let zoom_y = (self.height_px as f64 / span_y).log2();
        let zoom = zoom_x
            .min(zoom_y)
            .floor()
            .clamp(self.options.min_zoom, self.options.max_zoom);

        self.set_view(bounds.center(), zoom);
    }

    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.layers.layers()
    }

    pub fn get_layer(&self, layer_id: &str) -> Option<&(dyn LayerTrait + 'static)> {
        self.layers.get_layer(layer_id)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn count_by_kind(&self, kind: LayerKind) -> usize {
        self.layers.count_by_kind(kind)
    }
}
