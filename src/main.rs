// src/main.rs

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// --- Module Declarations ---
mod config;
mod content;
mod error;
mod game_logic;
mod rng;
mod ui;

// --- Imports ---
use crate::config::load_settings;
use crate::content::WordCatalog;
use crate::error::Result as AppResult;
use crate::game_logic::ImposterGame;
use crate::rng::ThreadRngChooser;

fn main() -> AppResult<()> {
    // Setup tracing. Logs go to stderr so they never interleave with the
    // game screens; RUST_LOG opts into engine tracing.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_PKG_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load Configuration
    let app_settings = load_settings()?;
    tracing::debug!("Configuration loaded: {:?}", app_settings);

    // Load the category/word catalog
    let catalog = Arc::new(WordCatalog::load(&app_settings.content)?);
    tracing::debug!(
        categories.count = catalog.categories().len(),
        "Word catalog ready"
    );

    // Run the game loop
    let mut game = ImposterGame::new(catalog, Box::new(ThreadRngChooser));
    ui::run(&mut game)
}
