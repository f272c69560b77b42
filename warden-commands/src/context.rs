use chrono::{DateTime, Utc};

use warden_core::{Entropy, Panel, PanelKind, Platform, Reply};
use warden_utils::entropy::auth_code;
use warden_utils::terminal::{panel, render_response};
use warden_utils::theme::Theme;

/// Per-invocation services handed to every handler.
pub struct CommandContext<'a> {
    pub platform: &'a dyn Platform,
    pub entropy: &'a dyn Entropy,
    pub theme: &'static Theme,
    /// Time the invocation is being handled; used for every timestamp a
    /// handler renders.
    pub now: DateTime<Utc>,
    pub started_at: DateTime<Utc>,
}

impl CommandContext<'_> {
    pub fn panel(&self, kind: PanelKind, title: &str, description: Option<&str>) -> Panel {
        panel(self.theme, kind, title, description, self.now)
    }

    /// An ephemeral error panel.
    pub fn error(&self, title: &str, description: &str) -> Reply {
        Reply::panel(self.panel(PanelKind::Error, title, Some(description)))
    }

    /// Render output as a terminal session in this theme.
    pub fn render(&self, actor: &str, command: &str, output: &str, success: bool) -> String {
        render_response(self.theme, actor, command, output, success)
    }

    /// Decorative authorization code, for themes that print one.
    pub fn auth_code(&self) -> Option<String> {
        self.theme
            .auth_prefix
            .map(|prefix| auth_code(self.entropy, prefix))
    }
}
