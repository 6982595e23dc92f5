use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use puppies::app::App;
use puppies::config::Settings;
use puppies::services::EntryStore;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("puppies=info")),
        )
        .init();

    let settings = Settings::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not load settings, using defaults");
        Settings::default()
    });

    let store = Arc::new(EntryStore::builtin());
    tracing::info!(entries = store.len(), theme = ?settings.theme, "starting");

    App::run(settings, store)
}
