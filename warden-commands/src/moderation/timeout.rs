use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

use warden_core::{ActionKind, Error, Invocation, Reply};

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::moderation::{action_reply, reason_or_default, require_permission, resolve_target};
use crate::replies;
use crate::{CommandMeta, OptionKind, OptionMeta};

/// Longest timeout the platform accepts, one week.
pub const MAX_TIMEOUT_MINUTES: u32 = 10_080;

pub const META: CommandMeta = CommandMeta {
    name: "timeout",
    desc: "Timeout a user",
    category: "moderation",
    usage: "/timeout <user> <duration> [reason]",
    options: &[
        OptionMeta {
            name: "user",
            desc: "The user to timeout",
            kind: OptionKind::User,
            required: true,
        },
        OptionMeta {
            name: "duration",
            desc: "Duration in minutes (1-10080)",
            kind: OptionKind::Integer,
            required: true,
        },
        OptionMeta {
            name: "reason",
            desc: "Reason for timeout",
            kind: OptionKind::String,
            required: false,
        },
    ],
    extended: false,
};

fn parse_minutes(raw: Option<i64>) -> Option<u32> {
    raw.and_then(|minutes| u32::try_from(minutes).ok())
        .filter(|minutes| (1..=MAX_TIMEOUT_MINUTES).contains(minutes))
}

pub struct Timeout;

#[async_trait]
impl CommandHandler for Timeout {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let Some(guild_id) = invocation.guild_id else {
            return Ok(replies::guild_only(ctx));
        };

        if let Some(denied) =
            require_permission(ctx, invocation, serenity::Permissions::MODERATE_MEMBERS)
        {
            return Ok(denied);
        }

        let Some(target) = resolve_target(ctx, guild_id, invocation).await? else {
            return Ok(replies::invalid_target(ctx));
        };

        let Some(minutes) = parse_minutes(invocation.integer("duration")) else {
            return Ok(ctx.error(
                "Invalid Duration",
                "Duration must be between 1-10080 minutes",
            ));
        };

        if !target.moderatable {
            return Ok(replies::action_failed(ctx, "timeout"));
        }

        let reason = reason_or_default(invocation);
        ctx.platform
            .timeout(
                guild_id,
                target.user.id,
                Duration::from_millis(u64::from(minutes) * 60_000),
                reason,
            )
            .await
            .context("timeout request failed")?;

        Ok(action_reply(
            ctx,
            invocation,
            ActionKind::Timeout { minutes },
            &target,
            reason,
            &format!("mod-timeout {} {minutes}m", target.user.tag),
        ))
    }
}
