// Points calculation system
// Multipliers come from the loaded settings document

use crate::error::LookupError;
use crate::models::achievement::ImmersionConfig;

/// Get the multiplier for a media type
pub fn get_multiplier(config: &ImmersionConfig, media_type: &str) -> Result<f64, LookupError> {
    config
        .multipliers
        .get(media_type)
        .copied()
        .ok_or_else(|| LookupError::UnknownMediaType(media_type.to_string()))
}

/// Calculate points for a given media type and raw amount
/// (characters, pages, episodes or minutes depending on the type)
pub fn points_for(
    config: &ImmersionConfig,
    media_type: &str,
    amount: f64,
) -> Result<f64, LookupError> {
    Ok(amount * get_multiplier(config, media_type)?)
}

/// Round awarded points for display and leaderboard totals
pub fn round_points(points: f64) -> i64 {
    points.round() as i64
}
