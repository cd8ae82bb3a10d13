//! "Gamer Tag" HUD: boxed panel with the local id and address.

use super::theme::TEXT_RGB;
use crate::domain::{HudColor, Profile};
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{Write, stdout};

pub const HUD_TITLE: &str = "Gamer Tag";

/// Text rows of the panel, without borders.
pub fn hud_rows(profile: &Profile) -> [String; 3] {
    [
        HUD_TITLE.to_string(),
        format!("ID: {}", profile.id),
        format!("Tailscale IP: {}", profile.address),
    ]
}

/// Full panel, one string per terminal line. Width follows the longest row.
pub fn hud_box(profile: &Profile) -> Vec<String> {
    let rows = hud_rows(profile);
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let bar = "─".repeat(width + 2);

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(format!("╭{}╮", bar));
    for row in &rows {
        let pad = width - row.chars().count();
        out.push(format!("│ {}{} │", row, " ".repeat(pad)));
    }
    out.push(format!("╰{}╯", bar));
    out
}

/// Draw the HUD: borders and title in the accent, body rows in the text colour.
pub fn print_hud(profile: &Profile, accent: HudColor) {
    let mut out = stdout();
    let (ar, ag, ab) = accent.rgb;
    let (tr, tg, tb) = TEXT_RGB;
    let accent_fg = Color::Rgb {
        r: ar,
        g: ag,
        b: ab,
    };
    let text_fg = Color::Rgb {
        r: tr,
        g: tg,
        b: tb,
    };

    let lines = hud_box(profile);
    let last = lines.len().saturating_sub(1);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 || i == last {
            let _ = out.execute(SetForegroundColor(accent_fg));
            let _ = out.execute(Print(line));
        } else {
            // Split "│ body │" so only the body takes the text colour.
            let inner = &line["│ ".len()..line.len() - " │".len()];
            let _ = out.execute(SetForegroundColor(accent_fg));
            let _ = out.execute(Print("│ "));
            if i == 1 {
                let _ = out.execute(SetAttribute(Attribute::Bold));
            } else {
                let _ = out.execute(SetForegroundColor(text_fg));
            }
            let _ = out.execute(Print(inner));
            let _ = out.execute(SetAttribute(Attribute::Reset));
            let _ = out.execute(SetForegroundColor(accent_fg));
            let _ = out.execute(Print(" │"));
        }
        let _ = out.execute(Print("\r\n"));
    }
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_rows() {
        let p = Profile {
            id: "abc123".into(),
            address: "100.64.1.2".into(),
        };
        assert_eq!(
            hud_rows(&p),
            [
                "Gamer Tag".to_string(),
                "ID: abc123".to_string(),
                "Tailscale IP: 100.64.1.2".to_string()
            ]
        );
    }

    #[test]
    fn test_hud_box_is_rectangular() {
        let lines = hud_box(&Profile::default());
        assert_eq!(lines.len(), 5);
        let w = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == w));
        assert!(lines[2].contains("ID: tundmatu"));
        assert!(lines[3].contains("Tailscale IP: unknown"));
    }
}
