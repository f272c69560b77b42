use async_trait::async_trait;

use warden_core::{Error, Invocation, Reply};
use warden_utils::terminal::format_server_info;

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::replies;
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "serverinfo",
    desc: "Display server information",
    category: "utility",
    usage: "/serverinfo",
    options: &[],
    extended: false,
};

pub struct ServerInfo;

#[async_trait]
impl CommandHandler for ServerInfo {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let Some(guild_id) = invocation.guild_id else {
            return Ok(replies::guild_only(ctx));
        };

        let guild = ctx.platform.guild(guild_id).await?;

        Ok(Reply::content(ctx.render(
            &invocation.actor.tag,
            "serverinfo",
            &format_server_info(ctx.theme, &guild),
            true,
        )))
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::Permissions;
    use warden_utils::theme::{NEXUS, TERMINAL};

    use super::*;
    use crate::testing::{FakePlatform, FixedEntropy, context, invocation, panel_title};

    #[tokio::test]
    async fn describes_the_guild() {
        let platform = FakePlatform::default();
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &TERMINAL);

        let reply = ServerInfo
            .run(&ctx, &invocation("serverinfo", Permissions::empty(), vec![]))
            .await
            .unwrap();

        let content = reply.as_content().unwrap();
        assert!(content.contains("SERVER INFORMATION"));
        assert!(content.contains("Test Guild"));
        assert!(content.contains("Tier 2"));
        assert!(content.contains("<@1>"));
    }

    #[tokio::test]
    async fn nexus_uses_its_own_banner() {
        let platform = FakePlatform::default();
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &NEXUS);

        let reply = ServerInfo
            .run(&ctx, &invocation("serverinfo", Permissions::empty(), vec![]))
            .await
            .unwrap();

        assert!(reply.as_content().unwrap().contains("SECTOR INTELLIGENCE"));
    }

    #[tokio::test]
    async fn outside_a_guild_is_rejected() {
        let platform = FakePlatform::default();
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &TERMINAL);
        let mut inv = invocation("serverinfo", Permissions::empty(), vec![]);
        inv.guild_id = None;

        let reply = ServerInfo.run(&ctx, &inv).await.unwrap();

        assert_eq!(panel_title(&reply), "`[ ERR ]` Guild Only");
    }
}
