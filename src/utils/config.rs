// Process-level configuration and media type display data

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings document used when IMMERSION_CONFIG_PATH is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/immersion_settings.yml";

/// Poll interval for the watch command when IMMERSION_RELOAD_SECS is unset
pub const DEFAULT_RELOAD_SECS: u64 = 5;

/// Environment-driven runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub config_path: PathBuf,
    pub reload_interval: Duration,
}

impl RuntimeSettings {
    /// Read settings from the environment (call after dotenvy)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let config_path = lookup("IMMERSION_CONFIG_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let reload_secs = lookup("IMMERSION_RELOAD_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_RELOAD_SECS);

        Self {
            config_path: PathBuf::from(config_path),
            reload_interval: Duration::from_secs(reload_secs),
        }
    }
}

/// Display label and raw unit for the media types the bot knows about
static MEDIA_TYPES: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        ("Visual_Novel", ("Visual Novel", "characters")),
        ("Manga", ("Manga", "pages")),
        ("Anime", ("Anime", "episodes")),
        ("Book", ("Book", "pages")),
        ("Reading_Time", ("Reading Time", "minutes")),
        ("Listening_Time", ("Listening Time", "minutes")),
        ("Listening", ("Listening", "minutes")),
        ("Reading", ("Reading", "characters")),
    ])
});

/// Get media type label, falling back to the raw name
pub fn get_media_label(media_type: &str) -> &str {
    MEDIA_TYPES
        .get(media_type)
        .map(|(label, _)| *label)
        .unwrap_or(media_type)
}

/// Get unit for media type
pub fn get_unit(media_type: &str) -> &'static str {
    MEDIA_TYPES
        .get(media_type)
        .map(|(_, unit)| *unit)
        .unwrap_or("units")
}
