use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use poise::serenity_prelude as serenity;

use warden_commands::{CommandContext, ReplySink};
use warden_core::{Actor, ArgValue, Argument, Error, Invocation, Reply, ReplyBody};
use warden_utils::embed::panel_embed;
use warden_utils::entropy::ThreadRngEntropy;
use warden_utils::time::snowflake_created_at;

use crate::data::Data;
use crate::platform::SerenityPlatform;

fn argument(option: serenity::ResolvedOption<'_>) -> Option<Argument> {
    let value = match option.value {
        serenity::ResolvedValue::String(value) => ArgValue::String(value.to_owned()),
        serenity::ResolvedValue::Integer(value) => ArgValue::Integer(value),
        serenity::ResolvedValue::User(user, _) => ArgValue::User(user.id),
        _ => return None,
    };

    Some(Argument::new(option.name, value))
}

/// Flatten a slash command interaction into an invocation.
pub fn invocation_from(
    interaction: &serenity::CommandInteraction,
    guild_name: Option<String>,
) -> Invocation {
    let permissions = interaction
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .unwrap_or_else(serenity::Permissions::empty);

    Invocation {
        command: interaction.data.name.clone(),
        actor: Actor {
            id: interaction.user.id,
            tag: interaction.user.tag(),
            permissions,
        },
        guild_id: interaction.guild_id,
        guild_name,
        channel_id: interaction.channel_id,
        args: interaction
            .data
            .options()
            .into_iter()
            .filter_map(argument)
            .collect(),
        issued_at: snowflake_created_at(interaction.id.get()),
    }
}

/// Replies to one command interaction over HTTP.
pub struct InteractionSink<'a> {
    ctx: &'a serenity::Context,
    interaction: &'a serenity::CommandInteraction,
}

impl<'a> InteractionSink<'a> {
    pub fn new(ctx: &'a serenity::Context, interaction: &'a serenity::CommandInteraction) -> Self {
        Self { ctx, interaction }
    }
}

#[async_trait]
impl ReplySink for InteractionSink<'_> {
    async fn defer(&self, ephemeral: bool) -> Result<(), Error> {
        if ephemeral {
            self.interaction.defer_ephemeral(self.ctx).await?;
        } else {
            self.interaction.defer(self.ctx).await?;
        }
        Ok(())
    }

    async fn respond(&self, reply: &Reply) -> Result<(), Error> {
        let message = match &reply.body {
            ReplyBody::Content(content) => {
                serenity::CreateInteractionResponseMessage::new().content(content)
            }
            ReplyBody::Panel(panel) => {
                serenity::CreateInteractionResponseMessage::new().embed(panel_embed(panel))
            }
        }
        .ephemeral(reply.ephemeral);

        self.interaction
            .create_response(self.ctx, serenity::CreateInteractionResponse::Message(message))
            .await?;
        Ok(())
    }

    async fn edit(&self, reply: &Reply) -> Result<(), Error> {
        let edit = match &reply.body {
            ReplyBody::Content(content) => serenity::EditInteractionResponse::new().content(content),
            ReplyBody::Panel(panel) => {
                serenity::EditInteractionResponse::new().embed(panel_embed(panel))
            }
        };

        self.interaction.edit_response(self.ctx, edit).await?;
        Ok(())
    }

    async fn follow_up(&self, reply: &Reply) -> Result<(), Error> {
        let followup = match &reply.body {
            ReplyBody::Content(content) => {
                serenity::CreateInteractionResponseFollowup::new().content(content)
            }
            ReplyBody::Panel(panel) => {
                serenity::CreateInteractionResponseFollowup::new().embed(panel_embed(panel))
            }
        }
        .ephemeral(reply.ephemeral);

        self.interaction.create_followup(self.ctx, followup).await?;
        Ok(())
    }
}

async fn shard_latency(data: &Data, shard_id: serenity::ShardId) -> Option<Duration> {
    let runners = data.shard_manager.runners.lock().await;
    runners.get(&shard_id).and_then(|runner| runner.latency)
}

/// Route a slash command interaction through the dispatcher.
pub async fn handle_command(
    ctx: &serenity::Context,
    data: &Data,
    interaction: &serenity::CommandInteraction,
) {
    let guild_name = interaction
        .guild_id
        .and_then(|guild_id| ctx.cache.guild(guild_id).map(|guild| guild.name.clone()));
    let invocation = invocation_from(interaction, guild_name);
    let platform = SerenityPlatform::new(
        ctx.http.clone(),
        data.bot_id,
        shard_latency(data, ctx.shard_id).await,
        ctx.cache.guild_count(),
    );
    let entropy = ThreadRngEntropy;
    let command_ctx = CommandContext {
        platform: &platform,
        entropy: &entropy,
        theme: data.theme,
        now: Utc::now(),
        started_at: data.started_at,
    };
    let sink = InteractionSink::new(ctx, interaction);

    data.dispatcher
        .handle(&command_ctx, &invocation, &sink)
        .await;
}
