use async_trait::async_trait;

use warden_core::{Error, Invocation, Reply};
use warden_utils::terminal::{box_row, boxed};
use warden_utils::time::format_uptime;

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::{CommandMeta, registered_commands};

pub const META: CommandMeta = CommandMeta {
    name: "status",
    desc: "Report system status",
    category: "utility",
    usage: "/status",
    options: &[],
    extended: true,
};

pub struct Status;

#[async_trait]
impl CommandHandler for Status {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let uptime = (ctx.now - ctx.started_at).num_seconds().max(0) as u64;
        let latency = ctx
            .platform
            .gateway_latency()
            .map_or_else(|| "n/a".to_owned(), |latency| format!("{}ms", latency.as_millis()));

        let rows = [
            box_row("System", ctx.theme.name),
            box_row("Version", ctx.theme.version),
            box_row("Uptime", &format_uptime(uptime)),
            box_row("Gateway", &latency),
            box_row("Sectors", &ctx.platform.guild_count().to_string()),
            box_row(
                "Modules",
                &format!("{} online", registered_commands(ctx.theme).len()),
            ),
        ];

        Ok(Reply::content(ctx.render(
            &invocation.actor.tag,
            "status",
            &boxed("SYSTEM STATUS", &rows),
            true,
        )))
    }
}
