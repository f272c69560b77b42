use anyhow::Context as _;
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use tracing::warn;

use warden_core::{Error, Invocation, Reply};

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::moderation::require_permission;
use crate::replies;
use crate::{CommandMeta, OptionKind, OptionMeta};

pub const MAX_CLEAR_AMOUNT: u8 = 100;

pub const META: CommandMeta = CommandMeta {
    name: "clear",
    desc: "Clear messages from channel",
    category: "moderation",
    usage: "/clear <amount>",
    options: &[OptionMeta {
        name: "amount",
        desc: "Number of messages to delete (1-100)",
        kind: OptionKind::Integer,
        required: true,
    }],
    extended: false,
};

fn parse_amount(raw: Option<i64>) -> Option<u8> {
    raw.and_then(|amount| u8::try_from(amount).ok())
        .filter(|amount| (1..=MAX_CLEAR_AMOUNT).contains(amount))
}

pub struct Clear;

#[async_trait]
impl CommandHandler for Clear {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        if invocation.guild_id.is_none() {
            return Ok(replies::guild_only(ctx));
        }

        if let Some(denied) =
            require_permission(ctx, invocation, serenity::Permissions::MANAGE_MESSAGES)
        {
            return Ok(denied);
        }

        let Some(amount) = parse_amount(invocation.integer("amount")) else {
            return Ok(ctx.error("Invalid Amount", "Amount must be between 1-100"));
        };

        let deleted = ctx
            .platform
            .bulk_delete(invocation.channel_id, amount)
            .await
            .context("bulk delete request failed")?;

        let channel = match ctx.platform.channel_name(invocation.channel_id).await {
            Ok(name) => name,
            Err(source) => {
                warn!(?source, channel_id = invocation.channel_id.get(), "could not fetch channel name");
                invocation.channel_id.get().to_string()
            }
        };

        Ok(Reply::content(ctx.render(
            &invocation.actor.tag,
            &format!("clear {amount}"),
            &format!("Successfully purged {deleted} message(s)\nChannel: {channel}"),
            true,
        ))
        .ephemeral(true))
    }
}
