use std::env;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;

use warden_utils::theme::ThemeKind;

#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub theme: ThemeKind,
    /// Register commands to this guild only instead of globally.
    pub guild_id: Option<serenity::GuildId>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = lookup("DISCORD_TOKEN")
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
            .context("DISCORD_TOKEN is not set")?;

        let theme = match non_blank(lookup("BOT_THEME")) {
            Some(raw) => raw.parse::<ThemeKind>()?,
            None => ThemeKind::Terminal,
        };

        let guild_id = non_blank(lookup("DISCORD_GUILD_ID"))
            .map(|raw| {
                raw.parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .map(serenity::GuildId::new)
                    .with_context(|| format!("DISCORD_GUILD_ID `{raw}` is not a guild id"))
            })
            .transpose()?;

        Ok(Self {
            token,
            theme,
            guild_id,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
