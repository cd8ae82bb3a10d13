//! Infrastructure adapters. Implement outbound ports and the inbound UI.
//!
//! JSON documents, external tools, terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod tools;
pub mod ui;
