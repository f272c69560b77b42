pub mod ban;
pub mod clear;
pub mod kick;
pub mod timeout;
pub mod warn;

use poise::serenity_prelude as serenity;

use warden_core::{ActionKind, ActionResult, Error, Invocation, Reply, TargetMember};
use warden_utils::permissions::has_permission;
use warden_utils::terminal::format_mod_action;

use crate::context::CommandContext;
use crate::replies;

pub(crate) const DEFAULT_REASON: &str = "No reason provided";

/// The permission gate every mutating handler calls before doing anything
/// else. Returns the rejection to send when the actor lacks `required`.
pub(crate) fn require_permission(
    ctx: &CommandContext<'_>,
    invocation: &Invocation,
    required: serenity::Permissions,
) -> Option<Reply> {
    if has_permission(invocation.actor.permissions, required) {
        None
    } else {
        Some(replies::permission_denied(ctx, required))
    }
}

/// Look up the `user` argument as a member of `guild_id`.
pub(crate) async fn resolve_target(
    ctx: &CommandContext<'_>,
    guild_id: serenity::GuildId,
    invocation: &Invocation,
) -> Result<Option<TargetMember>, Error> {
    let Some(user_id) = invocation.user("user") else {
        return Ok(None);
    };

    ctx.platform.member(guild_id, user_id).await
}

pub(crate) fn reason_or_default(invocation: &Invocation) -> &str {
    invocation.string("reason").unwrap_or(DEFAULT_REASON)
}

/// Render the logged-action box as a successful terminal session.
pub(crate) fn action_reply(
    ctx: &CommandContext<'_>,
    invocation: &Invocation,
    kind: ActionKind,
    target: &TargetMember,
    reason: &str,
    command: &str,
) -> Reply {
    let action = ActionResult {
        kind,
        target: target.user.tag.clone(),
        reason: reason.to_owned(),
        executor: invocation.actor.tag.clone(),
        at: ctx.now,
        success: true,
        auth_code: ctx.auth_code(),
    };

    Reply::content(ctx.render(
        &invocation.actor.tag,
        command,
        &format_mod_action(ctx.theme, &action),
        true,
    ))
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::Permissions;
    use warden_utils::theme::{NEXUS, TERMINAL};

    use super::*;
    use crate::testing::{FakePlatform, FixedEntropy, context, invocation, member, string_arg};

    #[test]
    fn administrators_pass_every_gate() {
        let platform = FakePlatform::default();
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &TERMINAL);
        let inv = invocation("ban", Permissions::ADMINISTRATOR, vec![]);

        assert!(require_permission(&ctx, &inv, Permissions::BAN_MEMBERS).is_none());
        assert!(require_permission(&ctx, &inv, Permissions::MANAGE_MESSAGES).is_none());
    }

    #[test]
    fn blank_reasons_fall_back_to_the_default() {
        let inv = invocation(
            "kick",
            Permissions::KICK_MEMBERS,
            vec![string_arg("reason", "   ")],
        );
        assert_eq!(reason_or_default(&inv), DEFAULT_REASON);
    }

    #[test]
    fn nexus_action_boxes_carry_an_auth_code() {
        let platform = FakePlatform::default();
        let entropy = FixedEntropy(0.5);
        let target = member(7, "intruder");
        let inv = invocation("kick", Permissions::KICK_MEMBERS, vec![]);

        let terminal = action_reply(
            &context(&platform, &entropy, &TERMINAL),
            &inv,
            ActionKind::Kick,
            &target,
            DEFAULT_REASON,
            "mod-kick intruder",
        );
        let nexus = action_reply(
            &context(&platform, &entropy, &NEXUS),
            &inv,
            ActionKind::Kick,
            &target,
            DEFAULT_REASON,
            "mod-kick intruder",
        );

        assert!(!terminal.as_content().unwrap().contains("Auth Code"));
        let nexus = nexus.as_content().unwrap();
        assert!(nexus.contains("NEXUS ENFORCEMENT LOGGED"));
        assert!(nexus.contains("Auth Code"));
        assert!(nexus.contains("NX-"));
    }
}
