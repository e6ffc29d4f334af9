// Achievement tier lookups
// Pure queries over a loaded ImmersionConfig, safe to call from any task

use serde::Serialize;

use crate::error::LookupError;
use crate::models::achievement::{AchievementTier, ImmersionConfig};

/// Where a cumulative total sits on a category's ladder
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierProgress<'a> {
    pub current: Option<&'a AchievementTier>,
    pub next: Option<&'a AchievementTier>,
    /// Points still needed for `next`, if any
    pub remaining: Option<f64>,
}

/// Ladder for a media type. Known types without achievements get an
/// empty ladder; names the settings never mention are an error.
fn ladder<'a>(
    config: &'a ImmersionConfig,
    media_type: &str,
) -> Result<&'a [AchievementTier], LookupError> {
    match config.tiers(media_type) {
        Some(tiers) => Ok(tiers),
        None if config.multipliers.contains_key(media_type) => Ok(&[]),
        None => Err(LookupError::UnknownMediaType(media_type.to_string())),
    }
}

/// Tiers unlocked when a total moves from `previous_total` to `new_total`,
/// i.e. every tier with `previous_total < points <= new_total`, ascending.
/// A NaN bound matches nothing.
pub fn tiers_crossed<'a>(
    config: &'a ImmersionConfig,
    media_type: &str,
    previous_total: f64,
    new_total: f64,
) -> Result<Vec<&'a AchievementTier>, LookupError> {
    Ok(ladder(config, media_type)?
        .iter()
        .filter(|tier| {
            let points = tier.points as f64;
            previous_total < points && points <= new_total
        })
        .collect())
}

/// Highest tier whose threshold is at or below `total`
pub fn highest_tier<'a>(
    config: &'a ImmersionConfig,
    media_type: &str,
    total: f64,
) -> Result<Option<&'a AchievementTier>, LookupError> {
    Ok(ladder(config, media_type)?
        .iter()
        .take_while(|tier| (tier.points as f64) <= total)
        .last())
}

/// First tier still locked at `total`
pub fn next_tier<'a>(
    config: &'a ImmersionConfig,
    media_type: &str,
    total: f64,
) -> Result<Option<&'a AchievementTier>, LookupError> {
    Ok(ladder(config, media_type)?
        .iter()
        .find(|tier| (tier.points as f64) > total))
}

pub fn progress<'a>(
    config: &'a ImmersionConfig,
    media_type: &str,
    total: f64,
) -> Result<TierProgress<'a>, LookupError> {
    let current = highest_tier(config, media_type, total)?;
    let next = next_tier(config, media_type, total)?;

    Ok(TierProgress {
        current,
        next,
        remaining: next.map(|tier| tier.points as f64 - total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::loader::{from_yaml_str, SAMPLE_SETTINGS};

    fn config() -> ImmersionConfig {
        from_yaml_str(SAMPLE_SETTINGS).unwrap()
    }

    fn thresholds(tiers: &[&AchievementTier]) -> Vec<u64> {
        tiers.iter().map(|t| t.points).collect()
    }

    #[test]
    fn test_anime_samurai_crossed() {
        let config = config();
        let crossed = tiers_crossed(&config, "Anime", 50.0, 150.0).unwrap();
        assert_eq!(crossed.len(), 1);
        assert_eq!(crossed[0].points, 100);
        assert_eq!(crossed[0].title, "Anime Samurai");
    }

    #[test]
    fn test_anime_ladder() {
        let config = config();
        let points: Vec<u64> = config.tiers("Anime").unwrap().iter().map(|t| t.points).collect();
        assert_eq!(points, vec![1, 100, 1000, 10000, 30000, 75000, 100000, 200000]);
    }

    #[test]
    fn test_unchanged_total_crosses_nothing() {
        let config = config();
        for total in [0.0, 1.0, 99.5, 100.0, 250_000.0] {
            assert!(tiers_crossed(&config, "Anime", total, total).unwrap().is_empty());
        }
    }

    #[test]
    fn test_crossed_from_zero_is_prefix() {
        let config = config();
        for (category, tiers) in config.achievements() {
            for total in [0.0, 1.0, 500.0, 1999.0, 10_000.0, 1_000_000.0] {
                let crossed = tiers_crossed(&config, category, 0.0, total).unwrap();
                let expected: Vec<&AchievementTier> =
                    tiers.iter().filter(|t| (t.points as f64) <= total).collect();
                assert_eq!(crossed, expected, "{} at {}", category, total);
            }
        }
    }

    #[test]
    fn test_crossed_boundaries() {
        let config = config();
        // Lower bound is exclusive, upper bound inclusive
        assert_eq!(thresholds(&tiers_crossed(&config, "Anime", 100.0, 1000.0).unwrap()), vec![1000]);
        assert_eq!(
            thresholds(&tiers_crossed(&config, "Anime", 0.5, 30000.0).unwrap()),
            vec![1, 100, 1000, 10000, 30000]
        );
    }

    #[test]
    fn test_decreasing_total_crosses_nothing() {
        let config = config();
        assert!(tiers_crossed(&config, "Anime", 5000.0, 50.0).unwrap().is_empty());
    }

    #[test]
    fn test_nan_totals_cross_nothing() {
        let config = config();
        assert!(tiers_crossed(&config, "Anime", f64::NAN, 150.0).unwrap().is_empty());
        assert!(tiers_crossed(&config, "Anime", 0.0, f64::NAN).unwrap().is_empty());
        assert_eq!(highest_tier(&config, "Anime", f64::NAN).unwrap(), None);
    }

    #[test]
    fn test_highest_reading_tier() {
        let config = config();
        let tier = highest_tier(&config, "Reading", 1999.0).unwrap().unwrap();
        assert_eq!(tier.points, 500);
        assert_eq!(tier.title, "Kana Connoisseur");

        let tier = highest_tier(&config, "Reading", 2000.0).unwrap().unwrap();
        assert_eq!(tier.points, 2000);
    }

    #[test]
    fn test_highest_below_first_tier() {
        let config = config();
        assert_eq!(highest_tier(&config, "Reading", 0.0).unwrap(), None);
        assert_eq!(highest_tier(&config, "Reading", 0.99).unwrap(), None);
    }

    #[test]
    fn test_multiplier_only_type_has_no_tiers() {
        let config = config();
        assert!(tiers_crossed(&config, "Reading_Time", 0.0, 1e9).unwrap().is_empty());
        assert_eq!(highest_tier(&config, "Book", 1e9).unwrap(), None);
    }

    #[test]
    fn test_unknown_media_type() {
        let config = config();
        let err = LookupError::UnknownMediaType("Podcast".to_string());
        assert_eq!(tiers_crossed(&config, "Podcast", 0.0, 10.0), Err(err.clone()));
        assert_eq!(highest_tier(&config, "Podcast", 10.0), Err(err.clone()));
        assert_eq!(next_tier(&config, "Podcast", 10.0), Err(err));
    }

    #[test]
    fn test_progress() {
        let config = config();
        let reading = progress(&config, "Reading", 1999.0).unwrap();
        assert_eq!(reading.current.map(|t| t.points), Some(500));
        assert_eq!(reading.next.map(|t| t.points), Some(2000));
        assert_eq!(reading.remaining, Some(1.0));

        let maxed = progress(&config, "Reading", 60_000.0).unwrap();
        assert_eq!(maxed.current.map(|t| t.points), Some(50000));
        assert!(maxed.next.is_none());
        assert!(maxed.remaining.is_none());
    }
}
