// Raw shapes of the settings document, before validation

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level document. Unknown top-level keys are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsDocument {
    /// Kept untyped so non-numeric values surface as invalid multipliers
    /// rather than generic parse errors
    pub points_multipliers: BTreeMap<String, serde_yaml::Value>,
    pub immersion_bot: ImmersionBotSection,
    pub achievements: BTreeMap<String, Vec<TierEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct ImmersionBotSection {
    pub allowed_log_channels: Vec<ChannelEntry>,
}

/// Channel ids show up both as integers and as quoted strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChannelEntry {
    Id(u64),
    Text(String),
}

impl ChannelEntry {
    pub fn to_id(&self) -> Option<u64> {
        match self {
            ChannelEntry::Id(id) => Some(*id),
            ChannelEntry::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierEntry {
    pub points: u64,
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_entry_accepts_strings() {
        let entries: Vec<ChannelEntry> =
            serde_yaml::from_str("[1384171532955422730, \"42\", \"general\"]").unwrap();
        let ids: Vec<Option<u64>> = entries.iter().map(ChannelEntry::to_id).collect();
        assert_eq!(ids, vec![Some(1384171532955422730), Some(42), None]);
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let text = r#"
points_multipliers: {}
immersion_bot:
  allowed_log_channels: []
achievements: {}
version: 2
"#;
        assert!(serde_yaml::from_str::<SettingsDocument>(text).is_err());
    }
}
