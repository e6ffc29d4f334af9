// Immersion Achievements
// Points multipliers, achievement tiers and log-channel allow-list
// for a Japanese immersion tracking bot

pub mod error;
pub mod features;
pub mod models;
pub mod utils;

pub use error::{ConfigError, LookupError};
pub use features::achievements::TierProgress;
pub use features::config_store::ConfigStore;
pub use models::achievement::{AchievementTier, CrossReferenceWarning, ImmersionConfig};
