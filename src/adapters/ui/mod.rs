pub mod banner;
pub mod hud;
pub mod theme;
pub mod tui;

use crate::domain::HudColor;

/// Prints the welcome banner and applies the accent to all subsequent inquire prompts.
/// Call once at startup (e.g. in main after tracing init).
pub fn init_ui(accent: HudColor) {
    banner::print_welcome(accent);
    theme::apply_theme(accent);
}
