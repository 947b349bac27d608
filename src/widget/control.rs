use crate::{
    core::map::{Map, MapOptions},
    layers::{base::LayerTrait, tile::TileLayer, zone::ZoneLayer},
    source::{RefitPolicy, ZoneSource},
    widget::context::{HostContainer, HostContext, MapContainer, Outputs},
};

/// Height of the child container the widget appends in `init`.
pub const MAP_HEIGHT_PX: u32 = 400;

/// Lifecycle phase of the control. `update_view` is meaningful only in
/// `Ready`; it is a no-op in the other phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Destroyed,
}

/// The widget controller: implements the host-mandated lifecycle and owns
/// the map instance and its layer set for the lifetime of the widget.
pub struct ZoneMapControl {
    source: Box<dyn ZoneSource>,
    map: Option<Map>,
    phase: Phase,
}

impl ZoneMapControl {
    pub fn new(source: Box<dyn ZoneSource>) -> Self {
        Self {
            source,
            map: None,
            phase: Phase::Uninitialized,
        }
    }

    /// Host lifecycle: create the child container, construct the map at
    /// the default global view, and add the base tile layer.
    pub fn init(&mut self, _context: &HostContext, container: &mut HostContainer) {
        let child = MapContainer::full_width(container, MAP_HEIGHT_PX);
        container.append(child);

        let mut map = Map::new(MapOptions::default(), child.width_px, child.height_px);
        if let Err(e) = map.add_layer(Box::new(TileLayer::osm())) {
            log::error!("failed to attach base tile layer: {e}");
        }

        self.map = Some(map);
        self.phase = Phase::Ready;
    }

    /// Host lifecycle: reconcile zone layers against the current data.
    ///
    /// Drops every non-tile layer, fetches the latest records, and adds
    /// one styled zone layer per record that parses. Records with
    /// malformed geometry are logged and skipped. When the source asks
    /// for it, the view is refit to the first rendered zone.
    pub async fn update_view(&mut self, context: &HostContext) {
        if self.phase != Phase::Ready {
            return;
        }
        let Some(map) = self.map.as_mut() else {
            return;
        };

        map.remove_zone_layers();

        let records = self.source.fetch_zones(context).await;

        let Some(map) = self.map.as_mut() else {
            return;
        };

        let mut first_bounds = None;
        for (index, record) in records.iter().enumerate() {
            let layer = match ZoneLayer::from_record(index, record) {
                Ok(layer) => layer,
                Err(e) => {
                    log::warn!("skipping zone record {index}: {e}");
                    continue;
                }
            };

            if first_bounds.is_none() {
                first_bounds = layer.bounds();
            }

            if let Err(e) = map.add_layer(Box::new(layer)) {
                log::warn!("failed to attach zone layer {index}: {e}");
            }
        }

        if self.source.refit_policy() == RefitPolicy::FirstZone {
            if let Some(bounds) = first_bounds {
                map.fit_bounds(&bounds);
            }
        }
    }

    /// Host lifecycle: release the map instance if present.
    pub fn destroy(&mut self) {
        self.map = None;
        self.phase = Phase::Destroyed;
    }

    /// Optional host hook; this widget is display-only.
    pub fn outputs(&self) -> Outputs {
        Outputs::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }
}
