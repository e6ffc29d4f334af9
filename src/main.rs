// Immersion Achievements
// Operator CLI for the immersion bot's points and achievement settings

mod commands;

use std::env;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use immersion_achievements::utils::config::RuntimeSettings;
use immersion_achievements::utils::loader;
use immersion_achievements::{ConfigStore, ImmersionConfig};

use crate::commands::{check, lookup, watch, Cli, Command};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "immersion_achievements=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut settings = RuntimeSettings::from_env();
    if let Some(path) = cli.config {
        settings.config_path = path;
    }

    let output = match cli.command {
        Command::Watch => {
            let store = ConfigStore::open(&settings.config_path)
                .await
                .with_context(|| invalid_settings(&settings))?;
            return watch::watch(&store, settings.reload_interval).await;
        }
        Command::Check => {
            let config = load(&settings)?;
            let warnings = config.cross_reference_warnings().len();
            if warnings > 0 {
                warn!("Settings are valid with {} warning(s)", warnings);
            } else {
                info!("Settings are valid");
            }
            check::summary(&config)
        }
        Command::Points { media_type, amount } => {
            lookup::points(&load(&settings)?, &media_type, amount)?
        }
        Command::Tiers { media_type, json } => lookup::tiers(&load(&settings)?, &media_type, json)?,
        Command::Crossed {
            media_type,
            previous,
            new,
        } => lookup::crossed(&load(&settings)?, &media_type, previous, new)?,
        Command::Highest { media_type, total } => {
            lookup::highest(&load(&settings)?, &media_type, total)?
        }
        Command::Channel { channel_id, parent } => {
            lookup::channel(&load(&settings)?, channel_id, parent)
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn load(settings: &RuntimeSettings) -> Result<ImmersionConfig> {
    loader::load(&settings.config_path).with_context(|| invalid_settings(settings))
}

fn invalid_settings(settings: &RuntimeSettings) -> String {
    format!("Invalid settings in {}", settings.config_path.display())
}
