use std::time::Duration;

use async_trait::async_trait;

use warden_core::{Error, Invocation, Reply};

use crate::context::CommandContext;
use crate::handler::CommandHandler;
use crate::CommandMeta;

/// Gateway latency below this is reported as optimal.
const OPTIMAL_LATENCY: Duration = Duration::from_millis(200);

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Check bot latency",
    category: "utility",
    usage: "/ping",
    options: &[],
    extended: false,
};

fn latency_status(gateway: Option<Duration>) -> &'static str {
    match gateway {
        Some(latency) if latency < OPTIMAL_LATENCY => "Optimal",
        _ => "Degraded",
    }
}

pub struct Ping;

#[async_trait]
impl CommandHandler for Ping {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error> {
        let round_trip = (ctx.now - invocation.issued_at).num_milliseconds().max(0);
        let gateway = ctx.platform.gateway_latency();
        let gateway_label =
            gateway.map_or_else(|| "n/a".to_owned(), |latency| format!("{}ms", latency.as_millis()));

        let output = format!(
            "Pong! 🏓\nBot Latency    : {round_trip}ms\nAPI Latency    : {gateway_label}\nStatus         : {}",
            latency_status(gateway)
        );

        Ok(Reply::content(ctx.render(
            &invocation.actor.tag,
            "ping",
            &output,
            true,
        )))
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::Permissions;
    use warden_utils::theme::TERMINAL;

    use super::*;
    use crate::testing::{FakePlatform, FixedEntropy, context, invocation};

    async fn ping(platform: &FakePlatform) -> String {
        let entropy = FixedEntropy(0.0);
        let ctx = context(platform, &entropy, &TERMINAL);
        let reply = Ping
            .run(&ctx, &invocation("ping", Permissions::empty(), vec![]))
            .await
            .unwrap();
        reply.as_content().unwrap().to_owned()
    }

    #[test]
    fn status_threshold() {
        assert_eq!(latency_status(Some(Duration::from_millis(199))), "Optimal");
        assert_eq!(latency_status(Some(Duration::from_millis(200))), "Degraded");
        assert_eq!(latency_status(None), "Degraded");
    }

    #[tokio::test]
    async fn reports_both_latencies() {
        let output = ping(&FakePlatform::default()).await;
        assert!(output.contains("Bot Latency    : 120ms"));
        assert!(output.contains("API Latency    : 45ms"));
        assert!(output.contains("Status         : Optimal"));
    }

    #[tokio::test]
    async fn unknown_gateway_latency_is_degraded() {
        let platform = FakePlatform {
            latency: None,
            ..FakePlatform::default()
        };
        let output = ping(&platform).await;
        assert!(output.contains("API Latency    : n/a"));
        assert!(output.contains("Status         : Degraded"));
    }
}
