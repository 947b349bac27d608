use crate::data::record::ZoneAttributes;

/// Popup content bound to a zone layer. The host's rendering surface
/// displays it when the zone is clicked; this crate only carries the text.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    content: String,
}

impl Popup {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Builds popup content summarizing zone attributes, one line per
    /// present attribute. Returns `None` when there is nothing to show.
    pub fn from_attributes(attributes: &ZoneAttributes) -> Option<Self> {
        if attributes.is_empty() {
            return None;
        }

        let mut lines = Vec::new();
        if let Some(zone) = &attributes.zone {
            lines.push(format!("Zone: {zone}"));
        }
        if let Some(population) = attributes.population {
            lines.push(format!("Population: {population}"));
        }
        if let Some(id) = &attributes.id {
            lines.push(format!("Id: {id}"));
        }

        Some(Self::new(lines.join("\n")))
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
