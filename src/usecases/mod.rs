//! Application use cases. Orchestrate domain logic via ports.

pub mod chat_service;
pub mod contact_service;
pub mod identity_service;
mod load_report;

pub use chat_service::ChatService;
pub use contact_service::ContactService;
pub use identity_service::IdentityService;
