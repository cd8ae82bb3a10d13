//! Neon theme for inquire prompts, driven by the HUD accent.

use crate::domain::HudColor;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

/// Default foreground for body text (#e0e0ff).
pub const TEXT_RGB: (u8, u8, u8) = (0xe0, 0xe0, 0xff);
/// Secondary text such as prompt help (#8a8ca8); readable on a dark background.
pub const HINT_RGB: (u8, u8, u8) = (0x8a, 0x8c, 0xa8);

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// Prompt styling for the given accent.
pub fn render_config(accent: HudColor) -> RenderConfig<'static> {
    let accent_fg = rgb(accent.rgb);
    RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("»").with_fg(accent_fg))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(accent_fg))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(accent_fg))
        .with_selected_option(Some(
            StyleSheet::new()
                .with_fg(accent_fg)
                .with_attr(Attributes::BOLD),
        ))
        .with_answer(StyleSheet::new().with_fg(rgb(TEXT_RGB)))
        .with_help_message(StyleSheet::new().with_fg(rgb(HINT_RGB)))
}

/// Make `accent` the style of every following prompt.
pub fn apply_theme(accent: HudColor) {
    inquire::set_global_render_config(render_config(accent));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hud_color;

    #[test]
    fn test_prefix_uses_accent() {
        let cfg = render_config(hud_color("Neon roheline"));
        assert_eq!(
            cfg.prompt_prefix.style.fg,
            Some(Color::Rgb {
                r: 0x00,
                g: 0xff,
                b: 0x6a
            })
        );
    }

    #[test]
    fn test_help_text_is_mid_grey() {
        let cfg = render_config(hud_color("Neon sinine"));
        assert_eq!(
            cfg.help_message.fg,
            Some(Color::Rgb {
                r: 0x8a,
                g: 0x8c,
                b: 0xa8
            })
        );
    }
}
