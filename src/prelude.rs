//! Prelude module for common zonemap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use zonemap::prelude::*;`

pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    map::{Map, MapOptions},
};

pub use crate::layers::{
    base::{LayerKind, LayerTrait},
    manager::LayerManager,
    tile::{OpenStreetMapSource, TileLayer, TileSource},
    zone::{ZoneLayer, ZoneStyle, DEFAULT_ZONE_COLOR},
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    record::{ZoneAttributes, ZonePage, ZoneRecord},
};

pub use crate::source::{
    bound::{BoundPropertySource, GEO_JSON_PARAMETER},
    dataverse::DataverseSource,
    RefitPolicy, ZoneSource,
};

pub use crate::ui::popup::Popup;

pub use crate::widget::{
    context::{HostContainer, HostContext, MapContainer, Outputs},
    control::{Phase, ZoneMapControl, MAP_HEIGHT_PX},
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
