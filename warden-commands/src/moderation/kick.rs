use anyhow::Context as _;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;

use warden_core::{ActionKind, Error, Invocation, Reply};

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::moderation::{action_reply, reason_or_default, require_permission, resolve_target};
use crate::replies;
use crate::{CommandMeta, OptionKind, OptionMeta};

pub const META: CommandMeta = CommandMeta {
    name: "kick",
    desc: "Kick a user from the server",
    category: "moderation",
    usage: "/kick <user> [reason]",
    options: &[
        OptionMeta {
            name: "user",
            desc: "The user to kick",
            kind: OptionKind::User,
            required: true,
        },
        OptionMeta {
            name: "reason",
            desc: "Reason for kick",
            kind: OptionKind::String,
            required: false,
        },
    ],
    extended: false,
};

pub struct Kick;

#[async_trait]
impl CommandHandler for Kick {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let Some(guild_id) = invocation.guild_id else {
            return Ok(replies::guild_only(ctx));
        };

        if let Some(denied) =
            require_permission(ctx, invocation, serenity::Permissions::KICK_MEMBERS)
        {
            return Ok(denied);
        }

        let Some(target) = resolve_target(ctx, guild_id, invocation).await? else {
            return Ok(replies::invalid_target(ctx));
        };

        if !target.kickable {
            return Ok(replies::action_failed(ctx, "kick"));
        }

        let reason = reason_or_default(invocation);
        ctx.platform
            .kick(guild_id, target.user.id, reason)
            .await
            .context("kick request failed")?;

        Ok(action_reply(
            ctx,
            invocation,
            ActionKind::Kick,
            &target,
            reason,
            &format!("mod-kick {}", target.user.tag),
        ))
    }
}
