use std::fmt;
use std::str::FromStr;

use crate::presence::{ActivityKind, PresenceEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeKind {
    Terminal,
    Nexus,
}

impl ThemeKind {
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Terminal => &TERMINAL,
            Self::Nexus => &NEXUS,
        }
    }
}

impl FromStr for ThemeKind {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "nexus" | "nay" => Ok(Self::Nexus),
            other => anyhow::bail!("unknown theme `{other}` (expected `terminal` or `nexus`)"),
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal => f.write_str("terminal"),
            Self::Nexus => f.write_str("nexus"),
        }
    }
}

/// How the initial interaction response is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyMode {
    /// Respond once the handler has finished.
    Immediate,
    /// Acknowledge first, then edit the acknowledgement with the result.
    Deferred,
}

/// Everything that differs between the bot variants.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub version: &'static str,
    pub tagline: &'static str,
    pub mission: &'static str,
    /// Host shown in the synthetic prompt line, `actor@host:~$`.
    pub host: &'static str,
    /// Identity printed in panel footers.
    pub panel_identity: &'static str,
    pub action_banner: &'static str,
    pub server_banner: &'static str,
    pub user_banner: &'static str,
    pub scan_banner: &'static str,
    /// Prefix for decorative authorization codes; `None` disables them.
    pub auth_prefix: Option<&'static str>,
    pub reply_mode: ReplyMode,
    /// Registers the themed extras (`scan`, `status`, `about`, `help`).
    pub extended_commands: bool,
    pub presence: &'static [PresenceEntry],
}

pub static TERMINAL: Theme = Theme {
    name: "Terminal Moderator",
    version: "v1.0.0",
    tagline: "Server moderation from the command line",
    mission: "Keep the server clean",
    host: "moderator",
    panel_identity: "system@moderator",
    action_banner: "MODERATION ACTION LOGGED",
    server_banner: "SERVER INFORMATION",
    user_banner: "USER INFORMATION",
    scan_banner: "THREAT ASSESSMENT",
    auth_prefix: None,
    reply_mode: ReplyMode::Immediate,
    extended_commands: false,
    presence: &[
        PresenceEntry::new("the server", ActivityKind::Watching),
        PresenceEntry::new("for rule breakers", ActivityKind::Watching),
        PresenceEntry::new("moderation logs", ActivityKind::Watching),
        PresenceEntry::new("/help for commands", ActivityKind::Listening),
        PresenceEntry::new("server activity", ActivityKind::Watching),
        PresenceEntry::new("with the ban hammer", ActivityKind::Playing),
        PresenceEntry::new("terminal commands", ActivityKind::Listening),
        PresenceEntry::new("security protocols", ActivityKind::Playing),
    ],
};

pub static NEXUS: Theme = Theme {
    name: "NEXUS AUTHORITY",
    version: "NAY v3.7.2",
    tagline: "Central Operations AI | Reality Protection System",
    mission: "Protect Earth from AOZ threats",
    host: "nexus",
    panel_identity: "NAY@nexus-authority",
    action_banner: "NEXUS ENFORCEMENT LOGGED",
    server_banner: "SECTOR INTELLIGENCE",
    user_banner: "OPERATIVE DOSSIER",
    scan_banner: "AOZ THREAT ASSESSMENT",
    auth_prefix: Some("NX"),
    reply_mode: ReplyMode::Deferred,
    extended_commands: true,
    presence: &[
        PresenceEntry::new("for AOZ incursions", ActivityKind::Watching),
        PresenceEntry::new("reality fluctuations", ActivityKind::Watching),
        PresenceEntry::new("Nexus command channels", ActivityKind::Listening),
        PresenceEntry::new("/help for directives", ActivityKind::Listening),
        PresenceEntry::new("dimensional scans", ActivityKind::Playing),
        PresenceEntry::new("the sector perimeter", ActivityKind::Watching),
        PresenceEntry::new("with containment protocols", ActivityKind::Playing),
        PresenceEntry::new("the timeline defense", ActivityKind::Competing),
    ],
};
