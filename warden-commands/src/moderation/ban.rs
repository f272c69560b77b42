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
    name: "ban",
    desc: "Ban a user from the server",
    category: "moderation",
    usage: "/ban <user> [reason]",
    options: &[
        OptionMeta {
            name: "user",
            desc: "The user to ban",
            kind: OptionKind::User,
            required: true,
        },
        OptionMeta {
            name: "reason",
            desc: "Reason for ban",
            kind: OptionKind::String,
            required: false,
        },
    ],
    extended: false,
};

pub struct Ban;

#[async_trait]
impl CommandHandler for Ban {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let Some(guild_id) = invocation.guild_id else {
            return Ok(replies::guild_only(ctx));
        };

        if let Some(denied) = require_permission(ctx, invocation, serenity::Permissions::BAN_MEMBERS)
        {
            return Ok(denied);
        }

        let Some(target) = resolve_target(ctx, guild_id, invocation).await? else {
            return Ok(replies::invalid_target(ctx));
        };

        if !target.bannable {
            return Ok(replies::action_failed(ctx, "ban"));
        }

        let reason = reason_or_default(invocation);
        ctx.platform
            .ban(guild_id, target.user.id, reason)
            .await
            .context("ban request failed")?;

        Ok(action_reply(
            ctx,
            invocation,
            ActionKind::Ban,
            &target,
            reason,
            &format!("mod-ban {}", target.user.tag),
        ))
    }
}
