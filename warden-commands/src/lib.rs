pub mod context;
pub mod delivery;
pub mod dispatch;
pub mod handler;
pub mod intel;
pub mod moderation;
pub mod registry;
pub mod replies;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use warden_utils::theme::Theme;

pub use context::CommandContext;
pub use delivery::{ReplySink, Responder};
pub use dispatch::Dispatcher;
pub use handler::CommandHandler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    User,
}

#[derive(Debug)]
pub struct OptionMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

#[derive(Debug)]
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
    pub options: &'static [OptionMeta],
    /// Only registered by themes that enable the extended command set.
    pub extended: bool,
}

impl CommandMeta {
    /// Commands that change guild state; their deferred replies stay private.
    pub fn mutates_guild(&self) -> bool {
        self.category == "moderation"
    }
}

pub const COMMANDS: &[CommandMeta] = &[
    moderation::kick::META,
    moderation::ban::META,
    moderation::timeout::META,
    moderation::warn::META,
    moderation::clear::META,
    utility::serverinfo::META,
    utility::userinfo::META,
    utility::ping::META,
    intel::scan::META,
    utility::status::META,
    utility::about::META,
    utility::help::META,
];

fn entry(
    name: &'static str,
    handler: impl CommandHandler + 'static,
) -> (&'static str, Arc<dyn CommandHandler>) {
    (name, Arc::new(handler))
}

pub fn handlers() -> Vec<(&'static str, Arc<dyn CommandHandler>)> {
    vec![
        entry(moderation::kick::META.name, moderation::kick::Kick),
        entry(moderation::ban::META.name, moderation::ban::Ban),
        entry(moderation::timeout::META.name, moderation::timeout::Timeout),
        entry(moderation::warn::META.name, moderation::warn::Warn),
        entry(moderation::clear::META.name, moderation::clear::Clear),
        entry(utility::serverinfo::META.name, utility::serverinfo::ServerInfo),
        entry(utility::userinfo::META.name, utility::userinfo::UserInfo),
        entry(utility::ping::META.name, utility::ping::Ping),
        entry(intel::scan::META.name, intel::scan::Scan),
        entry(utility::status::META.name, utility::status::Status),
        entry(utility::about::META.name, utility::about::About),
        entry(utility::help::META.name, utility::help::Help),
    ]
}

/// The command schema a theme registers with the platform.
pub fn registered_commands(theme: &Theme) -> Vec<&'static CommandMeta> {
    COMMANDS
        .iter()
        .filter(|meta| theme.extended_commands || !meta.extended)
        .collect()
}
