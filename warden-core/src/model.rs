use std::fmt;

use chrono::{DateTime, Utc};
use poise::serenity_prelude as serenity;

/// Public identity of a user as shown in panels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub id: serenity::UserId,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

/// The user that triggered an invocation, with their effective permissions
/// in the invoking guild.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: serenity::UserId,
    pub tag: String,
    pub permissions: serenity::Permissions,
}

/// A guild member an action may be applied to.
///
/// The mutability flags describe what the bot itself is allowed to do to
/// this member, as derived from role hierarchy and the bot's permissions.
#[derive(Clone, Debug)]
pub struct TargetMember {
    pub user: UserProfile,
    pub nickname: Option<String>,
    pub joined_at: Option<DateTime<Utc>>,
    /// Assigned roles, not counting the implicit everyone role.
    pub role_count: usize,
    pub kickable: bool,
    pub bannable: bool,
    pub moderatable: bool,
}

#[derive(Clone, Debug)]
pub struct GuildSnapshot {
    pub id: serenity::GuildId,
    pub name: String,
    pub owner_id: serenity::UserId,
    pub member_count: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub premium_tier: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgValue {
    String(String),
    Integer(i64),
    User(serenity::UserId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub value: ArgValue,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: ArgValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A single slash-command invocation, consumed once by the dispatcher.
#[derive(Clone, Debug)]
pub struct Invocation {
    pub command: String,
    pub actor: Actor,
    pub guild_id: Option<serenity::GuildId>,
    /// Guild name as known when the invocation arrived.
    pub guild_name: Option<String>,
    pub channel_id: serenity::ChannelId,
    pub args: Vec<Argument>,
    pub issued_at: DateTime<Utc>,
}

impl Invocation {
    /// Where the invocation came from, for logs.
    pub fn location(&self) -> String {
        match (&self.guild_name, self.guild_id) {
            (Some(name), _) => name.clone(),
            (None, Some(guild_id)) => guild_id.get().to_string(),
            (None, None) => "DM".to_owned(),
        }
    }

    fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.args
            .iter()
            .find(|argument| argument.name == name)
            .map(|argument| &argument.value)
    }

    /// String argument, with blank values treated as absent.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.arg(name) {
            Some(ArgValue::String(value)) if !value.trim().is_empty() => Some(value.trim()),
            _ => None,
        }
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.arg(name) {
            Some(ArgValue::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn user(&self, name: &str) -> Option<serenity::UserId> {
        match self.arg(name) {
            Some(ArgValue::User(user_id)) => Some(*user_id),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Kick,
    Ban,
    Timeout { minutes: u32 },
    Warn,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kick => f.write_str("KICK"),
            Self::Ban => f.write_str("BAN"),
            Self::Timeout { minutes } => write!(f, "TIMEOUT ({minutes}m)"),
            Self::Warn => f.write_str("WARN"),
        }
    }
}

/// Outcome of a moderation action, built only to feed the formatter.
#[derive(Clone, Debug)]
pub struct ActionResult {
    pub kind: ActionKind,
    pub target: String,
    pub reason: String,
    pub executor: String,
    pub at: DateTime<Utc>,
    pub success: bool,
    pub auth_code: Option<String>,
}
