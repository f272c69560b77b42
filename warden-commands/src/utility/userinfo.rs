use async_trait::async_trait;

use warden_core::{Error, Invocation, Reply};
use warden_utils::terminal::format_user_info;

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::replies;
use crate::{CommandMeta, OptionKind, OptionMeta};

pub const META: CommandMeta = CommandMeta {
    name: "userinfo",
    desc: "Display user information",
    category: "utility",
    usage: "/userinfo [user]",
    options: &[OptionMeta {
        name: "user",
        desc: "The user to get info about",
        kind: OptionKind::User,
        required: false,
    }],
    extended: false,
};

pub struct UserInfo;

#[async_trait]
impl CommandHandler for UserInfo {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let Some(guild_id) = invocation.guild_id else {
            return Ok(replies::guild_only(ctx));
        };

        // A requested user outside the guild falls back to the invoker.
        let requested = match invocation.user("user") {
            Some(user_id) => ctx.platform.member(guild_id, user_id).await?,
            None => None,
        };
        let member = match requested {
            Some(member) => member,
            None => match ctx.platform.member(guild_id, invocation.actor.id).await? {
                Some(member) => member,
                None => return Ok(replies::invalid_target(ctx)),
            },
        };

        Ok(Reply::content(ctx.render(
            &invocation.actor.tag,
            &format!("userinfo {}", member.user.tag),
            &format_user_info(ctx.theme, &member),
            true,
        )))
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::Permissions;
    use warden_utils::theme::TERMINAL;

    use super::*;
    use crate::testing::{
        ACTOR_ID, FakePlatform, FixedEntropy, context, invocation, member, panel_title, user_arg,
    };

    #[tokio::test]
    async fn defaults_to_the_invoking_actor() {
        let platform = FakePlatform::with_members([member(ACTOR_ID, "Alice"), member(7, "bob")]);
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &TERMINAL);

        let reply = UserInfo
            .run(&ctx, &invocation("userinfo", Permissions::empty(), vec![]))
            .await
            .unwrap();

        let content = reply.as_content().unwrap();
        assert!(content.contains("userinfo Alice"));
        assert!(content.contains("USER INFORMATION"));
    }

    #[tokio::test]
    async fn describes_the_requested_member() {
        let mut bob = member(7, "bob");
        bob.nickname = Some("bobby".to_owned());
        let platform = FakePlatform::with_members([bob]);
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &TERMINAL);

        let reply = UserInfo
            .run(
                &ctx,
                &invocation("userinfo", Permissions::empty(), vec![user_arg(7)]),
            )
            .await
            .unwrap();

        let content = reply.as_content().unwrap();
        assert!(content.contains("userinfo bob"));
        assert!(content.contains("bobby"));
    }

    #[tokio::test]
    async fn non_member_falls_back_to_the_invoking_actor() {
        let platform = FakePlatform::with_members([member(ACTOR_ID, "Alice")]);
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &TERMINAL);

        let reply = UserInfo
            .run(
                &ctx,
                &invocation("userinfo", Permissions::empty(), vec![user_arg(9)]),
            )
            .await
            .unwrap();

        assert!(reply.as_content().unwrap().contains("userinfo Alice"));
    }

    #[tokio::test]
    async fn unresolvable_actor_is_an_invalid_target() {
        let platform = FakePlatform::default();
        let entropy = FixedEntropy(0.0);
        let ctx = context(&platform, &entropy, &TERMINAL);

        let reply = UserInfo
            .run(
                &ctx,
                &invocation("userinfo", Permissions::empty(), vec![user_arg(9)]),
            )
            .await
            .unwrap();

        assert_eq!(panel_title(&reply), "`[ ERR ]` Invalid Target");
    }
}
