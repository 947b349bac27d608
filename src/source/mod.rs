pub mod bound;
pub mod dataverse;

use crate::{data::record::ZoneRecord, widget::context::HostContext};
use async_trait::async_trait;

/// Whether the widget refits the viewport after rendering zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefitPolicy {
    /// Leave the view where it is
    None,
    /// Fit the view to the bounds of the first rendered zone
    FirstZone,
}

/// Where zone records come from. Implementations absorb their own
/// failures: a fetch or parse error is logged and yields an empty list,
/// indistinguishable from zero zones at the call site.
#[async_trait]
pub trait ZoneSource: Send + Sync {
    async fn fetch_zones(&self, ctx: &HostContext) -> Vec<ZoneRecord>;

    /// Refit behavior this source expects after a refresh
    fn refit_policy(&self) -> RefitPolicy {
        RefitPolicy::None
    }
}
