//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ContactBook, DomainError, Identity, LoadOutcome, NodeInfo};

/// Local identity documents (`id.json`, `info.json`). Read-only.
#[async_trait::async_trait]
pub trait ProfileStorePort: Send + Sync {
    async fn load_identity(&self) -> LoadOutcome<Identity>;

    async fn load_node_info(&self) -> LoadOutcome<NodeInfo>;
}

/// Contact store document. Whole-document load and save; no partial updates.
#[async_trait::async_trait]
pub trait ContactStorePort: Send + Sync {
    async fn load(&self) -> LoadOutcome<ContactBook>;

    /// Replace the stored document. Creates the file (and its directory) if absent.
    async fn save(&self, book: &ContactBook) -> Result<(), DomainError>;
}

/// Live network address lookup (e.g. `tailscale ip -4`).
#[async_trait::async_trait]
pub trait AddressResolverPort: Send + Sync {
    /// First non-empty line reported by the tool, or `None` on any failure.
    async fn resolve_ipv4(&self) -> Option<String>;
}

/// Outbound message dispatch. Fire-and-forget: no delivery confirmation.
#[async_trait::async_trait]
pub trait MessageSenderPort: Send + Sync {
    /// Hand `text` for `recipient_id` to the transport. Errors only when the
    /// transport could not be invoked at all.
    async fn send(&self, recipient_id: &str, text: &str) -> Result<(), DomainError>;
}
