//! Domain entities. Pure data structures for the core business.
//!
//! No file/process types here — adapters map into these.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Sentinel shown when no local identifier is known.
pub const UNKNOWN_ID: &str = "tundmatu";

/// Sentinel shown when no network address is known.
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// Identity record (`id.json`). Read-only to this client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub id: Option<String>,
}

/// Info record (`info.json`). Cached Tailscale address hint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    #[serde(default)]
    pub tailscale_ip: Option<String>,
}

/// Resolved identity shown in the HUD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub address: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            id: UNKNOWN_ID.to_string(),
            address: UNKNOWN_ADDRESS.to_string(),
        }
    }
}

/// A remembered peer.
///
/// Fields are read leniently: missing or `null` becomes an empty string, numbers and
/// other scalars keep their JSON text. Unknown keys ride along in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

impl Contact {
    pub fn new(name: impl Into<String>, id: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            ip: ip.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// List label: `"<name> (<id>)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}

/// Recover the recipient id from a list label: text after the first `(`, cut at the next
/// `(` or `)`. `None` if the label has no `(`.
pub fn recipient_from_label(label: &str) -> Option<&str> {
    let (_, rest) = label.split_once('(')?;
    rest.split(['(', ')']).next()
}

/// Contact store document (`contacts.json`).
///
/// Unknown top-level keys are kept in `extra` so a rewrite does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactBook {
    #[serde(default)]
    pub friends: Vec<Contact>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One line of the session transcript. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub at: DateTime<Local>,
    pub recipient_id: String,
    pub text: String,
}

impl std::fmt::Display for ChatLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sina: {}", self.text)
    }
}

/// Result of reading an optional document. Lets the caller tell first-run absence
/// apart from a damaged file before substituting a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Absent,
    /// Unreadable, or not JSON at all.
    Corrupt(String),
    /// Well-formed JSON whose shape does not match the record schema.
    Mismatch(String),
}

impl<T> LoadOutcome<T> {
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            LoadOutcome::Loaded(v) => v,
            LoadOutcome::Absent | LoadOutcome::Corrupt(_) | LoadOutcome::Mismatch(_) => default,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt(_) | LoadOutcome::Mismatch(_))
    }
}

impl<T: Default> LoadOutcome<T> {
    pub fn or_default(self) -> T {
        self.unwrap_or(T::default())
    }
}

/// HUD accent colour, selectable from [`HUD_COLORS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudColor {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl HudColor {
    /// `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

impl std::fmt::Display for HudColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

pub const DEFAULT_HUD_COLOR: HudColor = HudColor {
    name: "Neon sinine",
    rgb: (0x00, 0xc8, 0xff),
};

/// Selectable accents, in menu order.
pub const HUD_COLORS: &[HudColor] = &[
    DEFAULT_HUD_COLOR,
    HudColor {
        name: "Neon lilla",
        rgb: (0xb4, 0x00, 0xff),
    },
    HudColor {
        name: "Neon roheline",
        rgb: (0x00, 0xff, 0x6a),
    },
    HudColor {
        name: "Neon roosa",
        rgb: (0xff, 0x2f, 0xd0),
    },
    HudColor {
        name: "Neon punane",
        rgb: (0xff, 0x17, 0x44),
    },
];

/// Look up a colour by name; unknown names get the default accent.
pub fn hud_color(name: &str) -> HudColor {
    HUD_COLORS
        .iter()
        .find(|c| c.name == name)
        .copied()
        .unwrap_or(DEFAULT_HUD_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrips_recipient() {
        let c = Contact::new("Mari", "id-9", "10.0.0.5");
        assert_eq!(c.label(), "Mari (id-9)");
        assert_eq!(recipient_from_label(&c.label()), Some("id-9"));
    }

    #[test]
    fn test_recipient_from_label_edge_cases() {
        assert_eq!(recipient_from_label("no parens"), None);
        assert_eq!(recipient_from_label("Jaan (abc"), Some("abc"));
        assert_eq!(recipient_from_label("Jaan ()"), Some(""));
        // First '(' wins, like the list widget split
        assert_eq!(recipient_from_label("A (b) (c)"), Some("b"));
        assert_eq!(recipient_from_label("A (b (c)"), Some("b "));
    }

    #[test]
    fn test_contact_missing_fields_default_to_empty() {
        let c: Contact = serde_json::from_str(r#"{"name":"Mari"}"#).unwrap();
        assert_eq!(c, Contact::new("Mari", "", ""));
    }

    #[test]
    fn test_contact_fields_read_leniently() {
        let c: Contact =
            serde_json::from_str(r#"{"name":"Mari","id":null,"ip":5,"note":"x"}"#).unwrap();
        assert_eq!(c.name, "Mari");
        assert_eq!(c.id, "");
        assert_eq!(c.ip, "5");
        assert_eq!(c.extra["note"], "x");
    }

    #[test]
    fn test_load_outcome_defaults() {
        assert_eq!(LoadOutcome::Loaded(3).unwrap_or(0), 3);
        assert_eq!(LoadOutcome::<i32>::Absent.unwrap_or(7), 7);
        let corrupt = LoadOutcome::<Vec<u8>>::Corrupt("bad".into());
        assert!(corrupt.is_corrupt());
        assert!(corrupt.or_default().is_empty());
        assert!(LoadOutcome::<i32>::Mismatch("shape".into()).is_corrupt());
        assert_eq!(LoadOutcome::<i32>::Mismatch("shape".into()).unwrap_or(1), 1);
    }

    #[test]
    fn test_hud_color_lookup() {
        assert_eq!(hud_color("Neon roosa").hex(), "#ff2fd0");
        assert_eq!(hud_color("Neon punane").hex(), "#ff1744");
        assert_eq!(hud_color("Pastel").hex(), "#00c8ff");
        assert_eq!(HUD_COLORS.len(), 5);
    }

    #[test]
    fn test_chat_line_display() {
        let line = ChatLine {
            at: Local::now(),
            recipient_id: "id-9".into(),
            text: "tere".into(),
        };
        assert_eq!(line.to_string(), "Sina: tere");
    }
}
