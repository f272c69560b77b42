use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use poise::serenity_prelude as serenity;

use warden_core::{Error, GuildSnapshot, Platform, TargetMember, UserProfile};
use warden_utils::permissions::{capabilities, rank_member};
use warden_utils::time::{snowflake_created_at, timestamp_to_utc};

/// Messages older than this many days cannot be bulk deleted.
const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

/// The platform seam backed by serenity's HTTP client. Built per interaction
/// so the gateway figures are current.
pub struct SerenityPlatform {
    http: Arc<serenity::Http>,
    bot_id: serenity::UserId,
    gateway_latency: Option<Duration>,
    guild_count: usize,
}

impl SerenityPlatform {
    pub fn new(
        http: Arc<serenity::Http>,
        bot_id: serenity::UserId,
        gateway_latency: Option<Duration>,
        guild_count: usize,
    ) -> Self {
        Self {
            http,
            bot_id,
            gateway_latency,
            guild_count,
        }
    }
}

fn is_unknown_member_error(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
                || matches!(response.error.code, 10007 | 10013)
    )
}

fn user_profile(user: &serenity::User) -> UserProfile {
    UserProfile {
        id: user.id,
        tag: user.tag(),
        created_at: snowflake_created_at(user.id.get()),
    }
}

#[async_trait]
impl Platform for SerenityPlatform {
    async fn member(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
    ) -> Result<Option<TargetMember>, Error> {
        let http = self.http.as_ref();

        let member = match guild_id.member(http, user_id).await {
            Ok(member) => member,
            Err(source) if is_unknown_member_error(&source) => return Ok(None),
            Err(source) => return Err(Error::new(source).context("member lookup failed")),
        };

        let guild = guild_id
            .to_partial_guild(http)
            .await
            .context("guild lookup failed")?;
        let bot = guild_id
            .member(http, self.bot_id)
            .await
            .context("bot member lookup failed")?;

        let flags = capabilities(&rank_member(&guild, &bot), &rank_member(&guild, &member));
        let everyone = serenity::RoleId::new(guild_id.get());

        Ok(Some(TargetMember {
            user: user_profile(&member.user),
            nickname: member.nick.clone(),
            joined_at: member.joined_at.map(timestamp_to_utc),
            role_count: member
                .roles
                .iter()
                .filter(|role_id| **role_id != everyone)
                .count(),
            kickable: flags.kickable,
            bannable: flags.bannable,
            moderatable: flags.moderatable,
        }))
    }

    async fn guild(&self, guild_id: serenity::GuildId) -> Result<GuildSnapshot, Error> {
        let guild = guild_id
            .to_partial_guild_with_counts(self.http.as_ref())
            .await
            .context("guild lookup failed")?;

        Ok(GuildSnapshot {
            id: guild.id,
            name: guild.name,
            owner_id: guild.owner_id,
            member_count: guild.approximate_member_count,
            created_at: snowflake_created_at(guild.id.get()),
            premium_tier: u8::from(guild.premium_tier),
        })
    }

    async fn channel_name(&self, channel_id: serenity::ChannelId) -> Result<String, Error> {
        let channel = channel_id
            .to_channel(self.http.as_ref())
            .await
            .context("channel lookup failed")?;

        Ok(channel
            .guild()
            .map_or_else(|| channel_id.get().to_string(), |channel| channel.name))
    }

    async fn kick(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        guild_id
            .kick_with_reason(self.http.as_ref(), user_id, reason)
            .await?;
        Ok(())
    }

    async fn ban(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        guild_id
            .ban_with_reason(self.http.as_ref(), user_id, 0, reason)
            .await?;
        Ok(())
    }

    async fn timeout(
        &self,
        guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        duration: Duration,
        reason: &str,
    ) -> Result<(), Error> {
        let until = Utc::now() + TimeDelta::from_std(duration)?;
        let until = serenity::Timestamp::from_unix_timestamp(until.timestamp())?;

        let edit = serenity::EditMember::new()
            .disable_communication_until_datetime(until)
            .audit_log_reason(reason);
        guild_id
            .edit_member(self.http.as_ref(), user_id, edit)
            .await?;
        Ok(())
    }

    async fn bulk_delete(&self, channel_id: serenity::ChannelId, limit: u8) -> Result<usize, Error> {
        let http = self.http.as_ref();
        let cutoff = Utc::now() - TimeDelta::days(BULK_DELETE_MAX_AGE_DAYS);

        let messages = channel_id
            .messages(http, serenity::GetMessages::new().limit(limit))
            .await?;
        let ids: Vec<serenity::MessageId> = messages
            .into_iter()
            .filter(|message| timestamp_to_utc(message.timestamp) > cutoff)
            .map(|message| message.id)
            .collect();

        match ids.as_slice() {
            [] => {}
            [id] => channel_id.delete_message(http, *id).await?,
            _ => channel_id.delete_messages(http, ids.iter().copied()).await?,
        }

        Ok(ids.len())
    }

    async fn direct_message(&self, user_id: serenity::UserId, content: &str) -> Result<(), Error> {
        let http = self.http.as_ref();
        let dm_channel = user_id.create_dm_channel(http).await?;
        dm_channel
            .send_message(http, serenity::CreateMessage::new().content(content))
            .await?;
        Ok(())
    }

    fn gateway_latency(&self) -> Option<Duration> {
        self.gateway_latency
    }

    fn guild_count(&self) -> usize {
        self.guild_count
    }
}
