use crate::{
    data::record::{ZonePage, ZoneRecord},
    source::{RefitPolicy, ZoneSource},
    widget::context::HostContext,
    MapError, Result,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::ACCEPT;
use reqwest::Client;

/// Shared HTTP client with a custom User-Agent. Building the client once
/// avoids the cost of TLS and connection pool setup for every refresh.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("zonemap/0.1")
        .build()
        .expect("failed to build reqwest client")
});

/// Versioned REST path prefix of the tabular data API.
const API_PATH: &str = "api/data/v9.2";

/// Zone source backed by a Dataverse-style OData endpoint. Issues
/// `GET {client_url}/api/data/v9.2/{entity_name}` and expects a JSON body
/// with a `value` array of zone records.
pub struct DataverseSource {
    entity_name: String,
}

impl DataverseSource {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
        }
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    fn endpoint(&self, base_url: &str) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            API_PATH,
            self.entity_name
        )
    }

    async fn request(&self, base_url: &str) -> Result<Vec<ZoneRecord>> {
        let url = self.endpoint(base_url);
        log::debug!("fetching zone records from {url}");

        let response = HTTP_CLIENT
            .get(&url)
            .header(ACCEPT, "application/json")
            .header("OData-MaxVersion", "4.0")
            .header("OData-Version", "4.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Status(status));
        }

        let page: ZonePage = response.json().await?;
        Ok(page.value)
    }
}

#[async_trait]
impl ZoneSource for DataverseSource {
    async fn fetch_zones(&self, ctx: &HostContext) -> Vec<ZoneRecord> {
        let Some(base_url) = ctx.client_url() else {
            log::error!("host context carries no client URL; rendering no zones");
            return Vec::new();
        };

        match self.request(base_url).await {
            Ok(records) => {
                log::debug!("fetched {} zone records for {}", records.len(), self.entity_name);
                records
            }
            Err(e) => {
                log::error!("error fetching zone data for {}: {e}", self.entity_name);
                Vec::new()
            }
        }
    }

    fn refit_policy(&self) -> RefitPolicy {
        RefitPolicy::FirstZone
    }
}
