use crate::prelude::HashMap;

/// Host-supplied context for a lifecycle call: the bound-parameter
/// dictionary (raw string values) and the host's client URL for remote
/// data calls. There is no other ambient configuration.
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    parameters: HashMap<String, String>,
    client_url: Option<String>,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), raw.into());
        self
    }

    pub fn with_client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = Some(url.into());
        self
    }

    pub fn set_parameter(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.parameters.insert(name.into(), raw.into());
    }

    /// Raw value of a bound property, if the host bound one
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn client_url(&self) -> Option<&str> {
        self.client_url.as_deref()
    }
}

/// The slot the host hands to `init`. The widget appends its own child
/// container to it and binds the map there.
#[derive(Debug, Clone)]
pub struct HostContainer {
    width_px: u32,
    children: Vec<MapContainer>,
}

impl HostContainer {
    pub fn new(width_px: u32) -> Self {
        Self {
            width_px,
            children: Vec::new(),
        }
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn append(&mut self, child: MapContainer) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[MapContainer] {
        &self.children
    }
}

/// The widget's own child container: full host width, fixed height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapContainer {
    pub width_px: u32,
    pub height_px: u32,
}

impl MapContainer {
    /// Full-width child of the host container at the given height.
    pub fn full_width(host: &HostContainer, height_px: u32) -> Self {
        Self {
            width_px: host.width_px(),
            height_px,
        }
    }
}

/// Output dictionary for the optional `get_outputs` host hook. The widget
/// is display-only and produces nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outputs {}
