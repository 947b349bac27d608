//! # zonemap
//!
//! An embeddable map widget that renders geographic zones on a tile-based
//! map inside a host application.
//!
//! Zone data is GeoJSON-shaped and comes either from a remote tabular data
//! service (see [`source::DataverseSource`]) or from a bound string property
//! already containing a feature collection (see
//! [`source::BoundPropertySource`]). The widget controller implements the
//! host lifecycle contract: `init` builds the map and its base tile layer,
//! `update_view` reconciles zone layers against the current data, and
//! `destroy` releases the map.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod source;
pub mod ui;
pub mod widget;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    map::{Map, MapOptions},
};

pub use crate::layers::{
    base::{LayerKind, LayerTrait},
    tile::{OpenStreetMapSource, TileLayer, TileSource},
    zone::{ZoneLayer, ZoneStyle},
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    record::{ZoneAttributes, ZoneRecord},
};

pub use crate::source::{
    bound::BoundPropertySource, dataverse::DataverseSource, RefitPolicy, ZoneSource,
};

pub use crate::ui::popup::Popup;

pub use crate::widget::{
    context::{HostContainer, HostContext, MapContainer, Outputs},
    control::ZoneMapControl,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
