use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One zone row as produced by a data source. Read-only to the widget
/// controller: the geometry stays an opaque string until render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Serialized GeoJSON geometry (or feature/collection) for the zone
    #[serde(rename = "GeoJSON")]
    pub geo_json: String,

    /// Stroke/fill color for the zone, else the default applies
    #[serde(rename = "zoneColor", default)]
    pub zone_color: Option<String>,

    /// Descriptive attributes shown in the zone popup. Not part of the
    /// remote wire shape; filled in by the bound-property source.
    #[serde(skip)]
    pub attributes: Option<ZoneAttributes>,
}

impl ZoneRecord {
    pub fn new(geo_json: impl Into<String>) -> Self {
        Self {
            geo_json: geo_json.into(),
            zone_color: None,
            attributes: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.zone_color = Some(color.into());
        self
    }

    pub fn with_attributes(mut self, attributes: ZoneAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// Attributes a zone popup summarizes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneAttributes {
    pub zone: Option<String>,
    pub population: Option<u64>,
    pub id: Option<String>,
}

impl ZoneAttributes {
    pub fn is_empty(&self) -> bool {
        self.zone.is_none() && self.population.is_none() && self.id.is_none()
    }

    /// Pulls the known attribute keys out of a feature's properties map.
    pub fn from_properties(properties: &HashMap<String, serde_json::Value>) -> Self {
        Self {
            zone: properties
                .get("zone")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            population: properties.get("population").and_then(serde_json::Value::as_u64),
            id: properties.get("id").map(|v| match v.as_str() {
                Some(s) => s.to_string(),
                None => v.to_string(),
            }),
        }
    }
}

/// Response body shape of the remote tabular API: a `value` array of
/// zone records.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonePage {
    pub value: Vec<ZoneRecord>,
}
