//! Identity/Info loader: who am I and at which address.
//!
//! - `id` from the identity document, else "tundmatu"
//! - address from the info document, else "unknown"
//! - a live answer from the address tool overrides the stored address

use super::load_report::report;
use crate::domain::{Profile, UNKNOWN_ADDRESS, UNKNOWN_ID};
use crate::ports::{AddressResolverPort, ProfileStorePort};
use std::sync::Arc;
use tracing::info;

pub struct IdentityService {
    store: Arc<dyn ProfileStorePort>,
    resolver: Arc<dyn AddressResolverPort>,
}

impl IdentityService {
    pub fn new(store: Arc<dyn ProfileStorePort>, resolver: Arc<dyn AddressResolverPort>) -> Self {
        Self { store, resolver }
    }

    /// Never fails; every missing piece degrades to its sentinel.
    pub async fn load_identity(&self) -> Profile {
        let identity = self.store.load_identity().await;
        report("id.json", &identity);
        let id = identity
            .or_default()
            .id
            .unwrap_or_else(|| UNKNOWN_ID.to_string());

        let node_info = self.store.load_node_info().await;
        report("info.json", &node_info);
        let mut address = node_info
            .or_default()
            .tailscale_ip
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string());

        // No write-back: the stored hint stays as it was.
        if let Some(live) = self.resolver.resolve_ipv4().await {
            address = live;
        }

        info!(id = %id, address = %address, "identity loaded");
        Profile { id, address }
    }
}
