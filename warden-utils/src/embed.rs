use poise::serenity_prelude as serenity;

use warden_core::{Panel, PanelKind};

/// Embed color for a panel kind.
pub fn panel_color(kind: PanelKind) -> u32 {
    match kind {
        PanelKind::Info => 0x00_FF_FF,
        PanelKind::Success => 0x00_FF_00,
        PanelKind::Error => 0xFF_00_00,
        PanelKind::Warn => 0xFF_FF_00,
        PanelKind::Command => 0xFF_00_FF,
    }
}

/// Build the serenity embed for a themed panel.
pub fn panel_embed(panel: &Panel) -> serenity::CreateEmbed {
    let builder = serenity::CreateEmbed::new()
        .title(panel.title.clone())
        .color(panel_color(panel.kind))
        .footer(serenity::CreateEmbedFooter::new(panel.footer.clone()));

    match panel.description.as_deref() {
        Some(description) => builder.description(description),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_panels_are_red() {
        assert_eq!(panel_color(PanelKind::Error), 0xFF0000);
        assert_eq!(panel_color(PanelKind::Success), 0x00FF00);
    }
}
