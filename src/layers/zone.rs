use crate::{
    core::geo::LatLngBounds,
    data::{geojson::GeoJson, record::ZoneRecord},
    layers::base::{LayerKind, LayerTrait},
    ui::popup::Popup,
    Result,
};
use serde::{Deserialize, Serialize};

/// Stroke/fill color applied when a record carries none.
pub const DEFAULT_ZONE_COLOR: &str = "#3388ff";

/// Style for a rendered zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneStyle {
    pub color: String,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl Default for ZoneStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_ZONE_COLOR.to_string(),
            weight: 3.0,
            fill_opacity: 0.2,
        }
    }
}

/// One data-driven zone drawn on the map: parsed GeoJSON, a resolved style,
/// and optional popup content. Zone layers are transient; every refresh
/// replaces the whole set.
pub struct ZoneLayer {
    id: String,
    geometry: GeoJson,
    style: ZoneStyle,
    popup: Option<Popup>,
    bounds: Option<LatLngBounds>,
}

impl ZoneLayer {
    /// Builds a zone layer from a record, parsing its geometry string.
    /// Fails with a parse error when the geometry is malformed; callers
    /// skip such records.
    pub fn from_record(index: usize, record: &ZoneRecord) -> Result<Self> {
        let geometry = GeoJson::parse(&record.geo_json)?;
        let bounds = geometry.bounds();

        let style = ZoneStyle {
            color: record
                .zone_color
                .clone()
                .unwrap_or_else(|| DEFAULT_ZONE_COLOR.to_string()),
            ..ZoneStyle::default()
        };

        let popup = record.attributes.as_ref().and_then(Popup::from_attributes);

        Ok(Self {
            id: format!("zone-{index}"),
            geometry,
            style,
            popup,
            bounds,
        })
    }

    pub fn geometry(&self) -> &GeoJson {
        &self.geometry
    }

    pub fn style(&self) -> &ZoneStyle {
        &self.style
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }
}

impl LayerTrait for ZoneLayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Zone
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        self.bounds.clone()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
