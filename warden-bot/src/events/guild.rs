use poise::serenity_prelude as serenity;
use tracing::info;

fn summary(name: &str, member_count: u64) -> String {
    format!("{name} ({member_count} members)")
}

/// Log each guild as it becomes available, and guilds joined at runtime.
pub fn log_guild(guild: &serenity::Guild, is_new: Option<bool>) {
    let summary = summary(&guild.name, guild.member_count);

    if is_new == Some(true) {
        info!(guild_id = guild.id.get(), "joined guild: {summary}");
    } else {
        info!(guild_id = guild.id.get(), "  └─ {summary}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_the_guild_and_its_size() {
        assert_eq!(summary("Test Guild", 42), "Test Guild (42 members)");
    }
}
