//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use rovenchat::adapters::persistence::{ContactsJson, ProfileJson};
use rovenchat::adapters::tools::{RovenchatSender, TailscaleResolver};
use rovenchat::adapters::ui::tui::TuiInputPort;
use rovenchat::ports::{
    AddressResolverPort, ContactStorePort, InputPort, MessageSenderPort, ProfileStorePort,
};
use rovenchat::shared::config::AppConfig;
use rovenchat::usecases::{ChatService, ContactService, IdentityService};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    // Logs go to stderr at WARN by default so they do not interleave with prompts.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config unreadable, using defaults");
            AppConfig::default()
        }
    };
    let paths = cfg.paths();
    info!(path = %paths.app_dir.display(), "app directory");

    let accent = cfg.hud_color_or_default();
    rovenchat::adapters::ui::init_ui(accent);

    // --- Outbound adapters ---
    let profile_store: Arc<dyn ProfileStorePort> =
        Arc::new(ProfileJson::new(&paths.id_file, &paths.info_file));
    let contact_store: Arc<dyn ContactStorePort> =
        Arc::new(ContactsJson::new(&paths.contacts_file));
    let resolver: Arc<dyn AddressResolverPort> =
        Arc::new(TailscaleResolver::new(cfg.tailscale_bin_or_default()));
    let sender: Arc<dyn MessageSenderPort> =
        Arc::new(RovenchatSender::new(cfg.send_bin_or_default()));

    // --- Services ---
    let identity_service = Arc::new(IdentityService::new(profile_store, resolver));
    let contact_service = Arc::new(ContactService::new(contact_store));
    let chat_service = Arc::new(ChatService::new(sender));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        identity_service,
        contact_service,
        chat_service,
        accent,
    ));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
