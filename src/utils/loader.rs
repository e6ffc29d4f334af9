// Settings loader and validator
// Turns the YAML document into an ImmersionConfig or rejects it whole

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::models::achievement::{AchievementTier, ImmersionConfig};
use crate::models::settings::{ChannelEntry, SettingsDocument, TierEntry};

#[cfg(test)]
pub(crate) const SAMPLE_SETTINGS: &str = include_str!("../../config/immersion_settings.yml");

/// Read and validate a settings file
pub fn load(path: impl AsRef<Path>) -> Result<ImmersionConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loading immersion settings from {}", path.display());
    from_yaml_str(&content)
}

/// Parse and validate a settings document.
/// Cross-reference mismatches are logged, never fatal.
pub fn from_yaml_str(content: &str) -> Result<ImmersionConfig, ConfigError> {
    let document: SettingsDocument = serde_yaml::from_str(content)?;

    let config = ImmersionConfig {
        multipliers: validate_multipliers(document.points_multipliers)?,
        allowed_log_channels: validate_channels(&document.immersion_bot.allowed_log_channels)?,
        achievements: validate_achievements(document.achievements)?,
    };

    for warning in config.cross_reference_warnings() {
        warn!("{}", warning);
    }
    if config.allowed_log_channels.is_empty() {
        warn!("No allowed log channels configured, immersion logging is disabled");
    }

    debug!(
        "Loaded {} multipliers, {} achievement categories, {} log channels",
        config.multipliers.len(),
        config.achievements.len(),
        config.allowed_log_channels.len()
    );

    Ok(config)
}

fn validate_multipliers(
    raw: BTreeMap<String, serde_yaml::Value>,
) -> Result<BTreeMap<String, f64>, ConfigError> {
    let mut multipliers = BTreeMap::new();

    for (media_type, value) in raw {
        let multiplier = match value.as_f64() {
            Some(m) if m.is_finite() && m > 0.0 => m,
            _ => {
                return Err(ConfigError::InvalidMultiplier {
                    media_type,
                    value: describe_value(&value),
                })
            }
        };
        multipliers.insert(media_type, multiplier);
    }

    Ok(multipliers)
}

fn validate_channels(raw: &[ChannelEntry]) -> Result<BTreeSet<u64>, ConfigError> {
    raw.iter()
        .map(|entry| {
            entry.to_id().ok_or_else(|| {
                ConfigError::MalformedConfig(format!(
                    "immersion_bot.allowed_log_channels: invalid channel id {:?}",
                    entry
                ))
            })
        })
        .collect()
}

fn validate_achievements(
    raw: BTreeMap<String, Vec<TierEntry>>,
) -> Result<BTreeMap<String, Vec<AchievementTier>>, ConfigError> {
    let mut achievements = BTreeMap::new();

    for (category, entries) in raw {
        if entries.is_empty() {
            return Err(ConfigError::EmptyTierList(category));
        }

        for (index, pair) in entries.windows(2).enumerate() {
            if pair[1].points <= pair[0].points {
                return Err(ConfigError::NonMonotonicThresholds {
                    category,
                    index: index + 1,
                    previous: pair[0].points,
                    points: pair[1].points,
                });
            }
        }

        let tiers = entries
            .into_iter()
            .map(|entry| AchievementTier {
                points: entry.points,
                title: entry.title,
                description: entry.description,
            })
            .collect();
        achievements.insert(category, tiers);
    }

    Ok(achievements)
}

fn describe_value(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => format!("\"{}\"", s),
        serde_yaml::Value::Null => "null".to_string(),
        other => format!("{:?}", other),
    }
}
