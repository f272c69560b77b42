use poise::serenity_prelude as serenity;
use tracing::info;

use warden_utils::presence::{ActivityKind, PresenceCycle, PresenceEntry, next_rotation_delay};
use warden_utils::theme::Theme;

fn activity(entry: PresenceEntry) -> serenity::ActivityData {
    match entry.kind {
        ActivityKind::Playing => serenity::ActivityData::playing(entry.label),
        ActivityKind::Listening => serenity::ActivityData::listening(entry.label),
        ActivityKind::Watching => serenity::ActivityData::watching(entry.label),
        ActivityKind::Competing => serenity::ActivityData::competing(entry.label),
    }
}

/// Cycle the theme's status lines forever, pausing 10-30 s between updates.
pub fn spawn_rotation(ctx: serenity::Context, theme: &'static Theme) {
    tokio::spawn(async move {
        let mut cycle = PresenceCycle::new(theme.presence);

        while let Some(entry) = cycle.advance() {
            ctx.set_presence(Some(activity(entry)), serenity::OnlineStatus::Online);
            info!(status = %entry.describe(), "presence updated");

            let delay = next_rotation_delay(&mut rand::thread_rng());
            tokio::time::sleep(delay).await;
        }
    });
}
