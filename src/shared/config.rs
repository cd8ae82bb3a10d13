//! Application configuration. App directory, tool paths, HUD accent.

use crate::domain::DomainError;
use serde::Deserialize;
use std::path::PathBuf;

/// Directory name under `$HOME` holding the JSON documents.
pub const APP_DIR_NAME: &str = ".rovenchat";

pub const DEFAULT_SEND_BIN: &str = "rovenchat-send";
pub const DEFAULT_TAILSCALE_BIN: &str = "tailscale";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory with id.json, info.json and contacts.json. Read from ROVENCHAT_APP_DIR.
    #[serde(default)]
    pub app_dir: Option<String>,

    /// Message send executable. Read from ROVENCHAT_SEND_BIN.
    #[serde(default)]
    pub send_bin: Option<String>,

    /// Tailscale CLI executable. Read from ROVENCHAT_TAILSCALE_BIN.
    #[serde(default)]
    pub tailscale_bin: Option<String>,

    /// Initial HUD accent name (e.g. "Neon lilla"). Read from ROVENCHAT_HUD_COLOR.
    #[serde(default)]
    pub hud_color: Option<String>,
}

/// Resolved document locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub app_dir: PathBuf,
    pub id_file: PathBuf,
    pub info_file: PathBuf,
    pub contacts_file: PathBuf,
}

impl AppPaths {
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        let app_dir = app_dir.into();
        Self {
            id_file: app_dir.join("id.json"),
            info_file: app_dir.join("info.json"),
            contacts_file: app_dir.join("contacts.json"),
            app_dir,
        }
    }
}

impl AppConfig {
    /// Environment (`ROVENCHAT_*`, `.env`) plus the optional file named by ROVENCHAT_CONFIG.
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let file = std::env::var("ROVENCHAT_CONFIG").ok();
        Self::load_from(file.as_deref())
    }

    /// Same as [`AppConfig::load`] with an explicit config file.
    pub fn load_from(config_file: Option<&str>) -> Result<Self, DomainError> {
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ROVENCHAT"));
        if let Some(path) = config_file {
            c = c.add_source(config::File::with_name(path));
        }
        c.build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Returns the app directory. Defaults to `$HOME/.rovenchat`, or `./.rovenchat` without HOME.
    pub fn app_dir_or_default(&self) -> PathBuf {
        if let Some(dir) = self.app_dir.as_deref().filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    pub fn paths(&self) -> AppPaths {
        AppPaths::new(self.app_dir_or_default())
    }

    pub fn send_bin_or_default(&self) -> String {
        self.send_bin
            .clone()
            .unwrap_or_else(|| DEFAULT_SEND_BIN.to_string())
    }

    pub fn tailscale_bin_or_default(&self) -> String {
        self.tailscale_bin
            .clone()
            .unwrap_or_else(|| DEFAULT_TAILSCALE_BIN.to_string())
    }

    /// Unknown names resolve to the default accent.
    pub fn hud_color_or_default(&self) -> crate::domain::HudColor {
        self.hud_color
            .as_deref()
            .map(crate::domain::hud_color)
            .unwrap_or(crate::domain::DEFAULT_HUD_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.send_bin_or_default(), "rovenchat-send");
        assert_eq!(cfg.tailscale_bin_or_default(), "tailscale");
        assert_eq!(cfg.hud_color_or_default().name, "Neon sinine");
        assert!(cfg.app_dir_or_default().ends_with(".rovenchat"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rovenchat.toml");
        std::fs::write(&path, "send_bin = \"/opt/rc/send\"\nhud_color = \"Neon roosa\"\n")
            .unwrap();

        let cfg = AppConfig::load_from(path.to_str()).unwrap();
        assert_eq!(cfg.send_bin_or_default(), "/opt/rc/send");
        assert_eq!(cfg.hud_color_or_default().hex(), "#ff2fd0");
    }

    #[test]
    fn test_bad_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "send_bin = [\n").unwrap();
        let missing = dir.path().join("missing.toml");

        for path in [&broken, &missing] {
            let err = AppConfig::load_from(path.to_str()).unwrap_err();
            assert!(matches!(err, DomainError::Config(_)));
        }
    }

    #[test]
    fn test_paths_from_explicit_dir() {
        let cfg = AppConfig {
            app_dir: Some("/tmp/rc".into()),
            hud_color: Some("Neon lilla".into()),
            ..Default::default()
        };
        let p = cfg.paths();
        assert_eq!(p.id_file, PathBuf::from("/tmp/rc/id.json"));
        assert_eq!(p.info_file, PathBuf::from("/tmp/rc/info.json"));
        assert_eq!(p.contacts_file, PathBuf::from("/tmp/rc/contacts.json"));
        assert_eq!(cfg.hud_color_or_default().hex(), "#b400ff");
    }
}
