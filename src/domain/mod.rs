//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    ChatLine, Contact, ContactBook, DEFAULT_HUD_COLOR, HUD_COLORS, HudColor, Identity,
    LoadOutcome, NodeInfo, Profile, UNKNOWN_ADDRESS, UNKNOWN_ID, hud_color, recipient_from_label,
};
pub use errors::DomainError;
