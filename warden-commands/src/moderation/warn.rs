use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use tracing::warn;

use warden_core::{ActionKind, Error, Invocation, Reply};

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::moderation::{action_reply, require_permission, resolve_target};
use crate::replies;
use crate::{CommandMeta, OptionKind, OptionMeta};

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Warn a user",
    category: "moderation",
    usage: "/warn <user> <reason>",
    options: &[
        OptionMeta {
            name: "user",
            desc: "The user to warn",
            kind: OptionKind::User,
            required: true,
        },
        OptionMeta {
            name: "reason",
            desc: "Reason for warning",
            kind: OptionKind::String,
            required: true,
        },
    ],
    extended: false,
};

pub struct Warn;

#[async_trait]
impl CommandHandler for Warn {
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

        let Some(reason) = invocation.string("reason") else {
            return Ok(ctx.error("Missing Reason", "A reason is required to warn a user"));
        };

        let guild_name = match ctx.platform.guild(guild_id).await {
            Ok(guild) => guild.name,
            Err(source) => {
                warn!(?source, guild_id = guild_id.get(), "could not fetch guild for warn notice");
                "the server".to_owned()
            }
        };

        let notice = ctx.render(
            &invocation.actor.tag,
            "mod-warn",
            &format!(
                "You have been warned in {guild_name}\nReason: {reason}\nIssued by: {}",
                invocation.actor.tag
            ),
            false,
        );
        if let Err(source) = ctx.platform.direct_message(target.user.id, &notice).await {
            warn!(?source, target = %target.user.tag, "could not DM warned member");
        }

        Ok(action_reply(
            ctx,
            invocation,
            ActionKind::Warn,
            &target,
            reason,
            &format!("mod-warn {}", target.user.tag),
        ))
    }
}
