use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use poise::serenity_prelude as serenity;

use warden_core::{
    Actor, ArgValue, Argument, Entropy, Error, GuildSnapshot, Invocation, Platform, Reply,
    TargetMember, UserProfile,
};
use warden_utils::theme::Theme;

use crate::context::CommandContext;
use crate::delivery::ReplySink;

pub(crate) const GUILD_ID: u64 = 500;
pub(crate) const CHANNEL_ID: u64 = 600;
pub(crate) const ACTOR_ID: u64 = 1;

/// 2024-01-01T00:00:00Z
pub(crate) fn fixed_now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_704_067_200, 0).unwrap()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Kick {
        user: u64,
        reason: String,
    },
    Ban {
        user: u64,
        reason: String,
    },
    Timeout {
        user: u64,
        duration: Duration,
        reason: String,
    },
    BulkDelete {
        channel: u64,
        limit: u8,
    },
    DirectMessage {
        user: u64,
        content: String,
    },
}

/// Recording stand-in for the chat platform.
pub(crate) struct FakePlatform {
    pub members: HashMap<serenity::UserId, TargetMember>,
    pub guild: GuildSnapshot,
    pub channel: String,
    /// Messages young enough to be bulk deleted.
    pub deletable_messages: usize,
    pub latency: Option<Duration>,
    pub fail_mutations: bool,
    pub fail_direct_messages: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            members: HashMap::new(),
            guild: GuildSnapshot {
                id: serenity::GuildId::new(GUILD_ID),
                name: "Test Guild".to_owned(),
                owner_id: serenity::UserId::new(ACTOR_ID),
                member_count: Some(42),
                created_at: fixed_now() - TimeDelta::days(400),
                premium_tier: 2,
            },
            channel: "general".to_owned(),
            deletable_messages: 100,
            latency: Some(Duration::from_millis(45)),
            fail_mutations: false,
            fail_direct_messages: false,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakePlatform {
    pub fn with_members(members: impl IntoIterator<Item = TargetMember>) -> Self {
        Self {
            members: members
                .into_iter()
                .map(|member| (member.user.id, member))
                .collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), Error> {
        let failing = match call {
            Call::DirectMessage { .. } => self.fail_direct_messages,
            _ => self.fail_mutations,
        };
        if failing {
            anyhow::bail!("platform rejected the request");
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

#[async_trait]
impl Platform for FakePlatform {
    async fn member(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
    ) -> Result<Option<TargetMember>, Error> {
        Ok(self.members.get(&user_id).cloned())
    }

    async fn guild(&self, _guild_id: serenity::GuildId) -> Result<GuildSnapshot, Error> {
        Ok(self.guild.clone())
    }

    async fn channel_name(&self, _channel_id: serenity::ChannelId) -> Result<String, Error> {
        Ok(self.channel.clone())
    }

    async fn kick(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        self.record(Call::Kick {
            user: user_id.get(),
            reason: reason.to_owned(),
        })
    }

    async fn ban(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        reason: &str,
    ) -> Result<(), Error> {
        self.record(Call::Ban {
            user: user_id.get(),
            reason: reason.to_owned(),
        })
    }

    async fn timeout(
        &self,
        _guild_id: serenity::GuildId,
        user_id: serenity::UserId,
        duration: Duration,
        reason: &str,
    ) -> Result<(), Error> {
        self.record(Call::Timeout {
            user: user_id.get(),
            duration,
            reason: reason.to_owned(),
        })
    }

    async fn bulk_delete(
        &self,
        channel_id: serenity::ChannelId,
        limit: u8,
    ) -> Result<usize, Error> {
        self.record(Call::BulkDelete {
            channel: channel_id.get(),
            limit,
        })?;
        Ok(usize::from(limit).min(self.deletable_messages))
    }

    async fn direct_message(&self, user_id: serenity::UserId, content: &str) -> Result<(), Error> {
        self.record(Call::DirectMessage {
            user: user_id.get(),
            content: content.to_owned(),
        })
    }

    fn gateway_latency(&self) -> Option<Duration> {
        self.latency
    }

    fn guild_count(&self) -> usize {
        3
    }
}

/// Entropy that always draws the same value.
pub(crate) struct FixedEntropy(pub f64);

impl Entropy for FixedEntropy {
    fn unit(&self) -> f64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SinkCall {
    Defer { ephemeral: bool },
    Respond(Reply),
    Edit(Reply),
    FollowUp(Reply),
}

/// Records successful reply calls; failing calls are not recorded. Like the
/// platform, follow-ups are refused until the interaction is acknowledged.
#[derive(Default)]
pub(crate) struct FakeSink {
    pub fail_defer: bool,
    /// How many initial responses are rejected before one is accepted.
    pub rejected_responses: usize,
    pub fail_edit: bool,
    pub fail_follow_up: bool,
    pub respond_attempts: AtomicUsize,
    pub calls: Mutex<Vec<SinkCall>>,
}

impl FakeSink {
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn respond_attempts(&self) -> usize {
        self.respond_attempts.load(Ordering::SeqCst)
    }

    fn acknowledged(&self) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|call| matches!(call, SinkCall::Defer { .. } | SinkCall::Respond(_)))
    }

    fn record(&self, failing: bool, call: SinkCall) -> Result<(), Error> {
        if failing {
            anyhow::bail!("interaction token expired");
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

#[async_trait]
impl ReplySink for FakeSink {
    async fn defer(&self, ephemeral: bool) -> Result<(), Error> {
        self.record(self.fail_defer, SinkCall::Defer { ephemeral })
    }

    async fn respond(&self, reply: &Reply) -> Result<(), Error> {
        let attempt = self.respond_attempts.fetch_add(1, Ordering::SeqCst);
        self.record(
            attempt < self.rejected_responses,
            SinkCall::Respond(reply.clone()),
        )
    }

    async fn edit(&self, reply: &Reply) -> Result<(), Error> {
        self.record(self.fail_edit, SinkCall::Edit(reply.clone()))
    }

    async fn follow_up(&self, reply: &Reply) -> Result<(), Error> {
        if !self.acknowledged() {
            anyhow::bail!("interaction has not been acknowledged");
        }
        self.record(self.fail_follow_up, SinkCall::FollowUp(reply.clone()))
    }
}

/// A settled member: old account, joined long ago, a couple of roles, and
/// fully manageable by the bot.
pub(crate) fn member(id: u64, tag: &str) -> TargetMember {
    TargetMember {
        user: UserProfile {
            id: serenity::UserId::new(id),
            tag: tag.to_owned(),
            created_at: fixed_now() - TimeDelta::days(365),
        },
        nickname: None,
        joined_at: Some(fixed_now() - TimeDelta::days(30)),
        role_count: 2,
        kickable: true,
        bannable: true,
        moderatable: true,
    }
}

pub(crate) fn context<'a>(
    platform: &'a FakePlatform,
    entropy: &'a FixedEntropy,
    theme: &'static Theme,
) -> CommandContext<'a> {
    CommandContext {
        platform,
        entropy,
        theme,
        now: fixed_now(),
        started_at: fixed_now() - TimeDelta::seconds(3_723),
    }
}

pub(crate) fn invocation(
    command: &str,
    permissions: serenity::Permissions,
    args: Vec<Argument>,
) -> Invocation {
    Invocation {
        command: command.to_owned(),
        actor: Actor {
            id: serenity::UserId::new(ACTOR_ID),
            tag: "Alice".to_owned(),
            permissions,
        },
        guild_id: Some(serenity::GuildId::new(GUILD_ID)),
        guild_name: Some("Test Guild".to_owned()),
        channel_id: serenity::ChannelId::new(CHANNEL_ID),
        args,
        issued_at: fixed_now() - TimeDelta::milliseconds(120),
    }
}

/// An invocation carrying every argument any command accepts.
pub(crate) fn full_invocation(
    command: &str,
    permissions: serenity::Permissions,
    target: u64,
) -> Invocation {
    invocation(
        command,
        permissions,
        vec![
            user_arg(target),
            string_arg("reason", "spamming"),
            int_arg("duration", 10),
            int_arg("amount", 5),
        ],
    )
}

pub(crate) fn user_arg(id: u64) -> Argument {
    Argument::new("user", ArgValue::User(serenity::UserId::new(id)))
}

pub(crate) fn string_arg(name: &str, value: &str) -> Argument {
    Argument::new(name, ArgValue::String(value.to_owned()))
}

pub(crate) fn int_arg(name: &str, value: i64) -> Argument {
    Argument::new(name, ArgValue::Integer(value))
}

pub(crate) fn panel_title(reply: &Reply) -> &str {
    reply
        .as_panel()
        .map(|panel| panel.title.as_str())
        .unwrap_or("<content>")
}
