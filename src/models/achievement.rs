// Validated immersion settings
// Built once by the loader, read-only afterwards

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single achievement unlocked at a cumulative point threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementTier {
    pub points: u64,
    pub title: String,
    pub description: String,
}

/// Achievement category that has no matching multiplier entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossReferenceWarning {
    pub category: String,
}

impl std::fmt::Display for CrossReferenceWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Achievement category '{}' has no points multiplier",
            self.category
        )
    }
}

/// Multipliers, log-channel allow-list and achievement ladders.
///
/// Only obtainable through the loader, so every instance satisfies:
/// multipliers are positive and finite, tier lists are non-empty and
/// strictly increasing by points.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmersionConfig {
    pub(crate) multipliers: BTreeMap<String, f64>,
    pub(crate) allowed_log_channels: BTreeSet<u64>,
    pub(crate) achievements: BTreeMap<String, Vec<AchievementTier>>,
}

impl ImmersionConfig {
    pub fn multipliers(&self) -> &BTreeMap<String, f64> {
        &self.multipliers
    }

    pub fn allowed_log_channels(&self) -> &BTreeSet<u64> {
        &self.allowed_log_channels
    }

    pub fn achievements(&self) -> &BTreeMap<String, Vec<AchievementTier>> {
        &self.achievements
    }

    /// Tier ladder for a category, ascending by points
    pub fn tiers(&self, category: &str) -> Option<&[AchievementTier]> {
        self.achievements.get(category).map(Vec::as_slice)
    }

    /// True if the name has a multiplier or an achievement ladder
    pub fn is_known_media_type(&self, media_type: &str) -> bool {
        self.multipliers.contains_key(media_type) || self.achievements.contains_key(media_type)
    }

    /// Achievement categories without a multiplier of the same name.
    /// Names are compared exactly; no aliasing between e.g. "Reading" and
    /// "Reading_Time" is assumed.
    pub fn cross_reference_warnings(&self) -> Vec<CrossReferenceWarning> {
        self.achievements
            .keys()
            .filter(|category| !self.multipliers.contains_key(*category))
            .map(|category| CrossReferenceWarning {
                category: category.clone(),
            })
            .collect()
    }
}
