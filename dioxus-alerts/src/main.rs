//! Entry point for the alerts-demo binary.

use anyhow::Result;

fn main() -> Result<()> {
    let config = dioxus_alerts::AlertsConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load config.toml: {err}");
        eprintln!("Using default configuration");
        dioxus_alerts::AlertsConfig::default()
    });

    // Set up tracing BEFORE Dioxus to prevent dioxus-logger from setting its own.
    dioxus_alerts::tracing::init(&config.logging);

    log::info!("Starting alerts-demo");

    dioxus_alerts::launch(config)
}
