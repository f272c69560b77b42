use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;

/// Milliseconds between the unix epoch and the first second of 2015.
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Creation time encoded in a snowflake id.
pub fn snowflake_created_at(id: u64) -> DateTime<Utc> {
    let millis = (id >> 22) as i64 + DISCORD_EPOCH_MS;
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

pub fn timestamp_to_utc(timestamp: serenity::Timestamp) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp.unix_timestamp(), 0).unwrap_or_default()
}

/// Format elapsed seconds as `1h 2m 3s`.
pub fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

/// Render a Discord timestamp markdown token (`<t:unix:style>`).
pub fn discord_timestamp(at: DateTime<Utc>, style: char) -> String {
    format!("<t:{}:{}>", at.timestamp(), style)
}
