use async_trait::async_trait;
use chrono::{DateTime, Utc};

use warden_core::{Error, Invocation, Reply, TargetMember};
use warden_utils::terminal::{box_row, boxed};

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::intel::threat::{Assessment, assess};
use crate::replies;
use crate::{CommandMeta, OptionKind, OptionMeta};

pub const META: CommandMeta = CommandMeta {
    name: "scan",
    desc: "Run a threat assessment on a user",
    category: "intel",
    usage: "/scan <user>",
    options: &[OptionMeta {
        name: "user",
        desc: "The user to scan",
        kind: OptionKind::User,
        required: true,
    }],
    extended: true,
};

const DISCLAIMER: &str = "Heuristic estimate for display only. Not a moderation signal.";

fn format_report(
    banner: &str,
    target: &TargetMember,
    assessment: &Assessment,
    now: DateTime<Utc>,
) -> String {
    let account_age = format!("{}d", (now - target.user.created_at).num_days());
    let join_age = target
        .joined_at
        .map_or_else(|| "Unknown".to_owned(), |at| format!("{}d", (now - at).num_days()));

    let rows = [
        box_row("Subject", &target.user.tag),
        box_row("ID", &target.user.id.get().to_string()),
        box_row("Acct Age", &account_age),
        box_row("Join Age", &join_age),
        box_row("Roles", &target.role_count.to_string()),
        box_row("Score", &assessment.score().to_string()),
        box_row("Threat", assessment.level.label()),
    ];

    let mut report = boxed(banner, &rows);
    report.push_str("\nIndicators:");
    if assessment.indicators.is_empty() {
        report.push_str("\n  - none");
    }
    for indicator in &assessment.indicators {
        report.push_str(&format!("\n  - {indicator}"));
    }
    report.push_str(&format!("\n{DISCLAIMER}"));
    report
}

pub struct Scan;

#[async_trait]
impl CommandHandler for Scan {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let Some(guild_id) = invocation.guild_id else {
            return Ok(replies::guild_only(ctx));
        };

        let Some(user_id) = invocation.user("user") else {
            return Ok(replies::invalid_target(ctx));
        };
        let Some(target) = ctx.platform.member(guild_id, user_id).await? else {
            return Ok(replies::invalid_target(ctx));
        };

        let assessment = assess(&target, ctx.now, ctx.entropy);

        Ok(Reply::content(ctx.render(
            &invocation.actor.tag,
            &format!("scan {}", target.user.tag),
            &format_report(ctx.theme.scan_banner, &target, &assessment, ctx.now),
            true,
        )))
    }
}
