use crate::{
    data::{
        geojson::{GeoJson, GeoJsonFeature},
        record::{ZoneAttributes, ZoneRecord},
    },
    source::ZoneSource,
    widget::context::HostContext,
};
use async_trait::async_trait;

/// Name of the bound property carrying the feature-collection string.
pub const GEO_JSON_PARAMETER: &str = "geoJsonData";

/// Zone source reading a bound string property already containing a
/// GeoJSON document. A parse failure of the whole document is logged and
/// rendered as zero zones.
pub struct BoundPropertySource {
    parameter: String,
}

impl BoundPropertySource {
    pub fn new() -> Self {
        Self::with_parameter(GEO_JSON_PARAMETER)
    }

    pub fn with_parameter(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
        }
    }

    fn record_from_feature(feature: &GeoJsonFeature) -> Option<ZoneRecord> {
        let geometry = feature.geometry.as_ref()?;
        let geo_json = match serde_json::to_string(geometry) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("skipping feature with unserializable geometry: {e}");
                return None;
            }
        };

        let mut record = ZoneRecord::new(geo_json);
        if let Some(properties) = &feature.properties {
            record.zone_color = properties
                .get("color")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string);

            let attributes = ZoneAttributes::from_properties(properties);
            if !attributes.is_empty() {
                record.attributes = Some(attributes);
            }
        }

        Some(record)
    }

    fn records_from(doc: &GeoJson) -> Vec<ZoneRecord> {
        match doc {
            GeoJson::Geometry(geometry) => match serde_json::to_string(geometry) {
                Ok(s) => vec![ZoneRecord::new(s)],
                Err(_) => Vec::new(),
            },
            _ => doc
                .features()
                .into_iter()
                .filter_map(Self::record_from_feature)
                .collect(),
        }
    }
}

impl Default for BoundPropertySource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneSource for BoundPropertySource {
    async fn fetch_zones(&self, ctx: &HostContext) -> Vec<ZoneRecord> {
        let Some(raw) = ctx.parameter(&self.parameter) else {
            log::debug!("bound property {} is not set", self.parameter);
            return Vec::new();
        };

        match GeoJson::parse(raw) {
            Ok(doc) => Self::records_from(&doc),
            Err(e) => {
                log::warn!("bound property {} is not valid GeoJSON: {e}", self.parameter);
                Vec::new()
            }
        }
    }
}
