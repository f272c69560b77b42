mod banner;
mod config;
mod data;
mod events;
mod platform;

use chrono::Utc;
use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use warden_commands::registry::create_commands;
use warden_commands::{Dispatcher, registered_commands};
use warden_core::Error;
use warden_utils::theme::Theme;

use crate::config::Config;
use crate::data::{Data, FrameworkContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    dotenvy::dotenv().ok();

    let config = Config::from_env().inspect_err(|source| error!(?source, "invalid configuration"))?;
    let theme = config.theme.theme();
    let guild_id = config.guild_id;

    banner::log_banner(theme);
    info!(theme = %config.theme, "configuration loaded");

    let intents = serenity::GatewayIntents::GUILDS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![],
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!(user = %ready.user.tag(), id = ready.user.id.get(), "logged in");

                register_commands(ctx, theme, guild_id).await;

                info!(count = ready.guilds.len(), "connected to guild(s)");

                events::presence::spawn_rotation(ctx.clone(), theme);
                info!("presence rotation started");

                let dispatcher = Dispatcher::for_theme(theme);
                info!(commands = ?dispatcher.command_names(), "dispatcher ready");

                Ok(Data {
                    dispatcher,
                    theme,
                    bot_id: ready.user.id,
                    started_at: Utc::now(),
                    shard_manager: framework.shard_manager().clone(),
                })
            })
        })
        .build();

    info!("connecting to the gateway");

    let mut client = serenity::ClientBuilder::new(config.token, intents)
        .framework(framework)
        .await
        .inspect_err(|source| error!(?source, "failed to build gateway client"))?;

    client
        .start()
        .await
        .inspect_err(|source| error!(?source, "gateway client stopped"))?;
    Ok(())
}

/// Submit the theme's command schema. Failure is logged and startup goes on.
async fn register_commands(
    ctx: &serenity::Context,
    theme: &Theme,
    guild_id: Option<serenity::GuildId>,
) {
    let commands = create_commands(&registered_commands(theme));
    let count = commands.len();

    let result = match guild_id {
        Some(guild_id) => guild_id.set_commands(&ctx.http, commands).await,
        None => serenity::Command::set_global_commands(&ctx.http, commands).await,
    };

    match (result, guild_id) {
        (Ok(_), Some(guild_id)) => {
            info!(count, guild_id = guild_id.get(), "slash commands registered to guild");
        }
        (Ok(_), None) => info!(count, "slash commands registered globally"),
        (Err(source), _) => error!(?source, "failed to register slash commands"),
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::UnknownInteraction { interaction, .. } => {
            debug!(command = %interaction.data.name, "interaction handled outside poise");
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        poise::FrameworkError::EventHandler { error, .. } => {
            error!(?error, "event handler error");
        }
        poise::FrameworkError::Setup { error, .. } => {
            error!(?error, "framework setup failed");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: FrameworkContext<'_>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Command(command),
        } => {
            events::interaction::handle_command(ctx, data, command).await;
        }
        serenity::FullEvent::GuildCreate { guild, is_new } => {
            events::guild::log_guild(guild, *is_new);
        }
        _ => {}
    }

    Ok(())
}
