// Error types for loading and querying the immersion settings

use std::path::PathBuf;

/// Fatal errors raised while loading the settings document.
/// The bot must not start serving with any of these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed settings document: {0}")]
    MalformedConfig(String),

    #[error(
        "Achievement thresholds for '{category}' must increase: tier #{index} has {points} points after {previous}"
    )]
    NonMonotonicThresholds {
        category: String,
        index: usize,
        previous: u64,
        points: u64,
    },

    #[error("Achievement category '{0}' has no tiers")]
    EmptyTierList(String),

    #[error("Invalid points multiplier for '{media_type}': {value}")]
    InvalidMultiplier { media_type: String, value: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::MalformedConfig(err.to_string())
    }
}

/// Per-event lookup failures. Callers reject the event, not the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),
}
