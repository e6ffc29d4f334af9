// Log channel allow-list
// Immersion logs are only accepted from configured channels

use crate::models::achievement::ImmersionConfig;

/// Check whether a log may be accepted from a channel.
/// Threads (forum posts) pass when their parent channel is allowed.
/// An empty allow-list rejects everything.
pub fn is_log_channel_allowed(
    config: &ImmersionConfig,
    channel_id: u64,
    parent_id: Option<u64>,
) -> bool {
    if config.allowed_log_channels.contains(&channel_id) {
        return true;
    }

    parent_id.is_some_and(|parent| config.allowed_log_channels.contains(&parent))
}
