// Lookup commands - points, tiers, crossings and channel checks

use std::fmt::Write;

use anyhow::{Context as _, Result};

use immersion_achievements::utils::config::{get_media_label, get_unit};
use immersion_achievements::utils::formatters::{format_amount, format_number, format_points_short};
use immersion_achievements::features::achievements::{progress, tiers_crossed};
use immersion_achievements::features::channel_gate::is_log_channel_allowed;
use immersion_achievements::utils::points::{points_for, round_points};
use immersion_achievements::{AchievementTier, ImmersionConfig};

fn tier_line(tier: &AchievementTier) -> String {
    format!(
        "{:>9} pts  {} - {}",
        format_number(tier.points as i64),
        tier.title,
        tier.description
    )
}

pub fn points(config: &ImmersionConfig, media_type: &str, amount: f64) -> Result<String> {
    let points = points_for(config, media_type, amount)?;

    Ok(format!(
        "{} {} of {} = {} points",
        format_amount(amount),
        get_unit(media_type),
        get_media_label(media_type),
        format_number(round_points(points))
    ))
}

pub fn tiers(config: &ImmersionConfig, media_type: &str, json: bool) -> Result<String> {
    if !config.is_known_media_type(media_type) {
        anyhow::bail!("Unknown media type: {}", media_type);
    }
    let ladder = config.tiers(media_type).unwrap_or_default();

    if json {
        return serde_json::to_string_pretty(ladder).context("Failed to serialize tiers");
    }

    if ladder.is_empty() {
        return Ok(format!("{} has no achievements", get_media_label(media_type)));
    }

    let mut out = format!("{} achievements:\n", get_media_label(media_type));
    for tier in ladder {
        let _ = writeln!(out, "{}", tier_line(tier));
    }
    Ok(out)
}

pub fn crossed(
    config: &ImmersionConfig,
    media_type: &str,
    previous: f64,
    new: f64,
) -> Result<String> {
    let crossed = tiers_crossed(config, media_type, previous, new)?;

    if crossed.is_empty() {
        return Ok("No new achievements".to_string());
    }

    let mut out = String::new();
    for tier in crossed {
        let _ = writeln!(out, "Unlocked: {}", tier_line(tier));
    }
    Ok(out)
}

pub fn highest(config: &ImmersionConfig, media_type: &str, total: f64) -> Result<String> {
    let standing = progress(config, media_type, total)?;

    let mut out = match standing.current {
        Some(tier) => format!("Current: {}\n", tier_line(tier)),
        None => "Current: none yet\n".to_string(),
    };

    match (standing.next, standing.remaining) {
        (Some(tier), Some(remaining)) => {
            let _ = writeln!(
                out,
                "Next:    {} ({} pts to go)",
                tier_line(tier),
                format_points_short(remaining.ceil() as i64)
            );
        }
        _ => out.push_str("Next:    all achievements unlocked\n"),
    }

    Ok(out)
}

pub fn channel(config: &ImmersionConfig, channel_id: u64, parent: Option<u64>) -> String {
    if is_log_channel_allowed(config, channel_id, parent) {
        format!("Channel {} accepts immersion logs", channel_id)
    } else {
        format!("Channel {} does not accept immersion logs", channel_id)
    }
}
