// Operator commands
pub mod check;
pub mod lookup;
pub mod watch;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and query immersion points and achievement settings
#[derive(Debug, Parser)]
#[command(name = "immersion-achievements", version, about)]
pub struct Cli {
    /// Settings file (defaults to IMMERSION_CONFIG_PATH or config/immersion_settings.yml)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate the settings file and print a summary
    Check,
    /// Points awarded for a raw logged amount
    Points {
        media_type: String,
        /// Characters, pages, episodes or minutes
        #[arg(value_parser = finite_number)]
        amount: f64,
    },
    /// List the achievement ladder of a category
    Tiers {
        media_type: String,
        #[arg(long)]
        json: bool,
    },
    /// Achievements unlocked when a total moves from PREVIOUS to NEW
    Crossed {
        media_type: String,
        #[arg(value_parser = finite_number)]
        previous: f64,
        #[arg(value_parser = finite_number)]
        new: f64,
    },
    /// Current achievement and progress towards the next one
    Highest {
        media_type: String,
        #[arg(value_parser = finite_number)]
        total: f64,
    },
    /// Check whether logs are accepted from a channel
    Channel {
        channel_id: u64,
        /// Parent channel when logging from a thread
        #[arg(long)]
        parent: Option<u64>,
    },
    /// Keep the settings loaded and reload them when the file changes
    Watch,
}

/// Amounts and totals must be real numbers; NaN and infinity are rejected
fn finite_number(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        Ok(_) => Err(format!("{} is not a finite number", value)),
        Err(e) => Err(e.to_string()),
    }
}
