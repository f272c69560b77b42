use std::time::Duration;

use async_trait::async_trait;
use poise::serenity_prelude as serenity;

use crate::Error;
use crate::model::{GuildSnapshot, TargetMember};

/// Every call the command handlers make into the chat platform.
///
/// The live implementation wraps the serenity HTTP client; tests use a
/// recording fake so the mutating calls can be asserted on.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Look up a guild member. `Ok(None)` means the user is not in the guild.
    async fn member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
    ) -> Result<Option<TargetMember>, Error>;

    async fn guild(&self, guild_id: serenity::GuildId) -> Result<GuildSnapshot, Error>;

    async fn channel_name(&self, channel_id: serenity::ChannelId) -> Result<String, Error>;

    async fn kick(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error>;

    async fn ban(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error>;

    async fn timeout(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        duration: Duration,
        reason: &str,
    ) -> Result<(), Error>;

    /// Delete up to `limit` recent messages; returns how many were removed.
    async fn bulk_delete(&self, channel_id: serenity::ChannelId, limit: u8)
    -> Result<usize, Error>;

    async fn direct_message(&self, user_id: serenity::UserId, content: &str) -> Result<(), Error>;

    /// Heartbeat latency of the shard that received the invocation, if known.
    fn gateway_latency(&self) -> Option<Duration>;

    fn guild_count(&self) -> usize;
}

/// Source of uniform random draws in `[0, 1)`.
pub trait Entropy: Send + Sync {
    fn unit(&self) -> f64;
}
