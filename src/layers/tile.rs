use crate::{
    core::geo::{LatLngBounds, TileCoord},
    layers::base::{LayerKind, LayerTrait},
};

/// Trait representing anything that can produce tile URLs for a given
/// coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// Attribution text the host is expected to display.
    fn attribution(&self) -> &str;
}

/// Default source that hits the public OpenStreetMap tile servers.
pub struct OpenStreetMapSource {
    subdomains: Vec<&'static str>,
}

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c"],
        }
    }
}

impl Default for OpenStreetMapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        if self.subdomains.is_empty() {
            return format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                coord.z, coord.x, coord.y
            );
        }

        // Rotate subdomains so neighbouring tiles spread across servers
        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }

    fn attribution(&self) -> &str {
        "© OpenStreetMap contributors"
    }
}

/// The persistent base map layer. Exactly one is attached for the lifetime
/// of a map instance; the widget never removes it on refresh.
pub struct TileLayer {
    id: String,
    source: Box<dyn TileSource>,
}

impl TileLayer {
    pub fn new(id: impl Into<String>, source: Box<dyn TileSource>) -> Self {
        Self {
            id: id.into(),
            source,
        }
    }

    /// The default OpenStreetMap base layer.
    pub fn osm() -> Self {
        Self::new("base-osm", Box::new(OpenStreetMapSource::new()))
    }

    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.source.url(coord)
    }

    pub fn attribution(&self) -> &str {
        self.source.attribution()
    }
}

impl LayerTrait for TileLayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> LayerKind {
        LayerKind::Tile
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osm_url_substitution() {
        let source = OpenStreetMapSource::new();
        let url = source.url(TileCoord::new(0, 0, 0));
        assert_eq!(url, "https://a.tile.openstreetmap.org/0/0/0.png");
    }

    #[test]
    fn test_osm_subdomain_rotation() {
        let source = OpenStreetMapSource::new();
        let a = source.url(TileCoord::new(0, 0, 2));
        let b = source.url(TileCoord::new(1, 0, 2));
        let c = source.url(TileCoord::new(2, 0, 2));
        assert!(a.starts_with("https://a."));
        assert!(b.starts_with("https://b."));
        assert!(c.starts_with("https://c."));
    }

    #[test]
    fn test_tile_layer_is_base_kind() {
        let layer = TileLayer::osm();
        assert_eq!(layer.kind(), LayerKind::Tile);
        assert!(layer.bounds().is_none());
        assert_eq!(layer.attribution(), "© OpenStreetMap contributors");
    }
}
