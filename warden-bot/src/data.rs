use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;

use warden_commands::Dispatcher;
use warden_utils::theme::Theme;

/// Shared state handed to every event.
pub struct Data {
    pub dispatcher: Dispatcher,
    pub theme: &'static Theme,
    pub bot_id: serenity::UserId,
    pub started_at: DateTime<Utc>,
    /// Source of per-shard gateway latency.
    pub shard_manager: Arc<serenity::ShardManager>,
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Data")
            .field("dispatcher", &self.dispatcher)
            .field("theme", &self.theme.name)
            .field("bot_id", &self.bot_id)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

pub type FrameworkContext<'a> = poise::FrameworkContext<'a, Data, warden_core::Error>;
