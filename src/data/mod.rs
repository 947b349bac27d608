pub mod geojson;
pub mod record;
