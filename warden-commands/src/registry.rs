use poise::serenity_prelude as serenity;

use crate::{CommandMeta, OptionKind, OptionMeta};

fn option_type(kind: OptionKind) -> serenity::CommandOptionType {
    match kind {
        OptionKind::String => serenity::CommandOptionType::String,
        OptionKind::Integer => serenity::CommandOptionType::Integer,
        OptionKind::User => serenity::CommandOptionType::User,
    }
}

fn create_option(option: &OptionMeta) -> serenity::CreateCommandOption {
    serenity::CreateCommandOption::new(option_type(option.kind), option.name, option.desc)
        .required(option.required)
}

/// Build the slash command schema submitted to the platform at startup.
pub fn create_commands(metas: &[&CommandMeta]) -> Vec<serenity::CreateCommand> {
    metas
        .iter()
        .map(|meta| {
            meta.options.iter().fold(
                serenity::CreateCommand::new(meta.name).description(meta.desc),
                |command, option| command.add_option(create_option(option)),
            )
        })
        .collect()
}
