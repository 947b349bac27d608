use crate::core::geo::LatLngBounds;

/// Kinds of layer a map can carry. The tile layer is the persistent base;
/// zone layers are transient and replaced wholesale on every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Tile,
    Zone,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Tile => write!(f, "tile"),
            LayerKind::Zone => write!(f, "zone"),
        }
    }
}

/// Object-safe layer interface shared by the tile layer and zone layers.
pub trait LayerTrait: Send {
    fn id(&self) -> &str;

    fn kind(&self) -> LayerKind;

    /// Geographic extent of the layer, if it has one. Tile layers cover the
    /// whole world and report `None`.
    fn bounds(&self) -> Option<LatLngBounds>;

    fn as_any(&self) -> &dyn std::any::Any
    where
        Self: 'static;
}
