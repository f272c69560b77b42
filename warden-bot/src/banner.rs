use tracing::info;

use warden_utils::theme::Theme;

const RULE_WIDTH: usize = 64;

fn banner_lines(theme: &Theme) -> Vec<String> {
    let rule = "═".repeat(RULE_WIDTH);
    vec![
        rule.clone(),
        format!("  {}", theme.name),
        format!("  {} | {}", theme.version, theme.tagline),
        format!("  Mission: {}", theme.mission),
        rule,
    ]
}

/// Startup banner, written through the log so it lands wherever logs go.
pub fn log_banner(theme: &Theme) {
    for line in banner_lines(theme) {
        info!("{line}");
    }
}
