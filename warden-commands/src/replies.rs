use poise::serenity_prelude as serenity;

use warden_core::Reply;
use warden_utils::permissions::permission_label;

use crate::context::CommandContext;

pub fn unknown_command(ctx: &CommandContext<'_>) -> Reply {
    ctx.error("Unknown Command", "Command not found in registry")
}

pub fn execution_error(ctx: &CommandContext<'_>, detail: &str) -> Reply {
    ctx.error(
        "Execution Error",
        &format!("Failed to execute command\nError: {detail}"),
    )
}

pub fn permission_denied(ctx: &CommandContext<'_>, required: serenity::Permissions) -> Reply {
    ctx.error(
        "Permission Denied",
        &format!("You lack {} permission", permission_label(required)),
    )
}

pub fn invalid_target(ctx: &CommandContext<'_>) -> Reply {
    ctx.error("Invalid Target", "User not found in server")
}

/// The bot is not allowed to `verb` the target because of role hierarchy.
pub fn action_failed(ctx: &CommandContext<'_>, verb: &str) -> Reply {
    ctx.error(
        "Action Failed",
        &format!("Cannot {verb} this user (role hierarchy)"),
    )
}

pub fn guild_only(ctx: &CommandContext<'_>) -> Reply {
    ctx.error("Guild Only", "This command only works in servers.")
}
