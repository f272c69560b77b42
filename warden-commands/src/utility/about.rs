use async_trait::async_trait;

use warden_core::{Error, Invocation, PanelKind, Reply};

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "about",
    desc: "About this system",
    category: "utility",
    usage: "/about",
    options: &[],
    extended: true,
};

pub struct About;

#[async_trait]
impl CommandHandler for About {
    async fn run(&self, ctx: &CommandContext<'_>, _invocation: &Invocation) -> Result<Reply, Error> {
        let theme = ctx.theme;
        let description = format!(
            "{}\n\nDesignation : {}\nBuild       : {}\nMission     : {}",
            theme.tagline, theme.panel_identity, theme.version, theme.mission
        );

        Ok(Reply::panel(ctx.panel(
            PanelKind::Info,
            theme.name,
            Some(&description),
        )))
    }
}
