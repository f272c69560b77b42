use async_trait::async_trait;

use warden_core::{Error, Invocation, PanelKind, Reply};
use warden_utils::terminal::format_list;

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::{CommandMeta, registered_commands};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "List available directives",
    category: "utility",
    usage: "/help",
    options: &[],
    extended: true,
};

/// One numbered list per category, in registration order within each.
fn grouped_help(commands: &[&CommandMeta]) -> String {
    let mut categories: Vec<&str> = commands.iter().map(|meta| meta.category).collect();
    categories.sort_unstable();
    categories.dedup();

    categories
        .into_iter()
        .map(|category| {
            let items: Vec<String> = commands
                .iter()
                .filter(|meta| meta.category == category)
                .map(|meta| format!("{:<24} {}", meta.usage, meta.desc))
                .collect();
            format_list(&category.to_uppercase(), &items)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub struct Help;

#[async_trait]
impl CommandHandler for Help {
    async fn run(&self, ctx: &CommandContext<'_>, _invocation: &Invocation) -> Result<Reply, Error> {
        let commands = registered_commands(ctx.theme);

        Ok(Reply::panel(ctx.panel(
            PanelKind::Info,
            "Directive Index",
            Some(&grouped_help(&commands)),
        )))
    }
}
