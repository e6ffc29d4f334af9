// Check command - validate a settings file and summarize it

use std::fmt::Write;

use immersion_achievements::utils::config::{get_media_label, get_unit};
use immersion_achievements::utils::formatters::format_number;
use immersion_achievements::ImmersionConfig;

/// Render a summary of a loaded config
pub fn summary(config: &ImmersionConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Points multipliers:");
    for (media_type, multiplier) in config.multipliers() {
        let _ = writeln!(
            out,
            "  {:<16} {} pts/{}",
            get_media_label(media_type),
            multiplier,
            get_unit(media_type).trim_end_matches('s')
        );
    }

    let _ = writeln!(out, "Achievements:");
    for (category, tiers) in config.achievements() {
        let top = tiers.last().map(|t| t.points as i64).unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<16} {} tiers, up to {} pts",
            get_media_label(category),
            tiers.len(),
            format_number(top)
        );
    }

    let _ = writeln!(
        out,
        "Allowed log channels: {}",
        config.allowed_log_channels().len()
    );

    let warnings = config.cross_reference_warnings();
    if !warnings.is_empty() {
        let _ = writeln!(out, "Warnings:");
        for warning in warnings {
            let _ = writeln!(out, "  {}", warning);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use immersion_achievements::utils::loader;

    const SAMPLE: &str = include_str!("../../config/immersion_settings.yml");

    #[test]
    fn test_summary_lists_everything() {
        let config = loader::from_yaml_str(SAMPLE).unwrap();
        let out = summary(&config);
        assert!(out.contains("Manga"));
        assert!(out.contains("0.25 pts/page"));
        assert!(out.contains("8 tiers, up to 200,000 pts"));
        assert!(out.contains("Allowed log channels: 2"));
        assert!(out.contains("'Listening' has no points multiplier"));
        assert!(out.contains("'Reading' has no points multiplier"));
    }
}
