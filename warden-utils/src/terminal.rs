use chrono::{DateTime, SecondsFormat, Utc};

use warden_core::{ActionResult, GuildSnapshot, Panel, PanelKind, TargetMember};

use crate::theme::Theme;
use crate::time::discord_timestamp;

const BOX_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 9;
const FIELD_WIDTH: usize = 27;
const PROMPT_LABEL_MAX: usize = 32;

const ANSI_GREEN: &str = "\u{1b}[32m";
const ANSI_RED: &str = "\u{1b}[31m";
const ANSI_RESET: &str = "\u{1b}[0m";

/// Reduce an actor name to something safe for the prompt line: lowercase
/// `[a-z0-9._-]`, falling back to `user`.
pub fn sanitize_prompt_label(raw: &str) -> String {
    let label: String = raw
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
        .take(PROMPT_LABEL_MAX)
        .collect();

    if label.is_empty() {
        "user".to_owned()
    } else {
        label
    }
}

/// Break up triple backticks so text cannot close the surrounding fence.
pub fn neutralize_fences(text: &str) -> String {
    text.replace("```", "`\u{200B}`\u{200B}`")
}

/// Wrap command output in a fenced terminal session:
///
/// ```text
/// actor@host:~$ command
/// output
/// [✓] Process exited with code 0
/// ```
pub fn render_response(
    theme: &Theme,
    actor: &str,
    command: &str,
    output: &str,
    success: bool,
) -> String {
    let prompt = format!("{}@{}:~$", sanitize_prompt_label(actor), theme.host);
    let (color, symbol, code) = if success {
        (ANSI_GREEN, '✓', 0)
    } else {
        (ANSI_RED, '✗', 1)
    };

    let mut response = String::from("```ansi\n");
    response.push_str(&format!(
        "{ANSI_GREEN}{prompt}{ANSI_RESET} {}\n",
        neutralize_fences(command)
    ));
    response.push_str(&neutralize_fences(output));
    response.push('\n');
    response.push_str(&format!(
        "{color}[{symbol}]{ANSI_RESET} Process exited with code {code}\n"
    ));
    response.push_str("```");
    response
}

pub fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

fn box_header(title: &str) -> String {
    format!("║  {:<width$}║", truncate(title, BOX_WIDTH - 2), width = BOX_WIDTH - 2)
}

/// A `║ Label     : value   ║` line, truncating the value to the box width.
pub fn box_row(label: &str, value: &str) -> String {
    box_row_raw(label, &truncate(value, FIELD_WIDTH))
}

/// Like [`box_row`] but never truncates, for markup such as `<t:..>` tokens
/// that must stay intact.
pub fn box_row_raw(label: &str, value: &str) -> String {
    format!(
        "║ {:<label_width$} : {:<field_width$}║",
        label,
        value,
        label_width = LABEL_WIDTH,
        field_width = FIELD_WIDTH
    )
}

/// Draw a double-line box with a title section followed by `rows`.
pub fn boxed(title: &str, rows: &[String]) -> String {
    let rule = "═".repeat(BOX_WIDTH);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("╔{rule}╗"));
    lines.push(box_header(title));
    lines.push(format!("╠{rule}╣"));
    lines.extend(rows.iter().cloned());
    lines.push(format!("╚{rule}╝"));
    lines.join("\n")
}

pub fn format_mod_action(theme: &Theme, action: &ActionResult) -> String {
    let reason = if action.reason.trim().is_empty() {
        "No reason provided"
    } else {
        action.reason.as_str()
    };

    let mut rows = vec![
        box_row("Action", &action.kind.to_string().to_uppercase()),
        box_row("Target", &action.target),
        box_row("Executor", &action.executor),
        box_row("Reason", reason),
        box_row(
            "Status",
            if action.success { "EXECUTED" } else { "FAILED" },
        ),
        box_row(
            "Timestamp",
            &action.at.to_rfc3339_opts(SecondsFormat::Millis, true),
        ),
    ];
    if let Some(code) = action.auth_code.as_deref() {
        rows.push(box_row("Auth Code", code));
    }

    boxed(theme.action_banner, &rows)
}

pub fn format_server_info(theme: &Theme, guild: &GuildSnapshot) -> String {
    let members = guild
        .member_count
        .map_or_else(|| "Unknown".to_owned(), |count| count.to_string());

    let rows = [
        box_row("Name", &guild.name),
        box_row("ID", &guild.id.get().to_string()),
        box_row_raw("Owner", &format!("<@{}>", guild.owner_id.get())),
        box_row("Members", &members),
        box_row_raw("Created", &discord_timestamp(guild.created_at, 'F')),
        box_row("Boost Lvl", &format!("Tier {}", guild.premium_tier)),
    ];

    boxed(theme.server_banner, &rows)
}

pub fn format_user_info(theme: &Theme, member: &TargetMember) -> String {
    let joined = member
        .joined_at
        .map_or_else(|| "Unknown".to_owned(), |at| discord_timestamp(at, 'R'));

    let rows = [
        box_row("Username", &member.user.tag),
        box_row("ID", &member.user.id.get().to_string()),
        box_row("Nickname", member.nickname.as_deref().unwrap_or("None")),
        box_row_raw("Joined", &joined),
        box_row_raw("Created", &discord_timestamp(member.user.created_at, 'R')),
        box_row("Roles", &member.role_count.to_string()),
    ];

    boxed(theme.user_banner, &rows)
}

/// Numbered list with a rule above and below and a total line.
pub fn format_list(title: &str, items: &[String]) -> String {
    let rule = "─".repeat(BOX_WIDTH);
    let mut output = format!("{title}\n{rule}\n");
    for (index, item) in items.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", index + 1, item));
    }
    output.push_str(&format!("{rule}\nTotal: {} item(s)", items.len()));
    output
}

fn panel_symbol(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Info => "[ INFO ]",
        PanelKind::Success => "[ OK ]",
        PanelKind::Error => "[ ERR ]",
        PanelKind::Warn => "[ WARN ]",
        PanelKind::Command => "[ $ ]",
    }
}

/// Build a themed panel; the description is wrapped in an ansi fence.
pub fn panel(
    theme: &Theme,
    kind: PanelKind,
    title: &str,
    description: Option<&str>,
    now: DateTime<Utc>,
) -> Panel {
    Panel {
        kind,
        title: format!("`{}` {}", panel_symbol(kind), title),
        description: description
            .map(|text| format!("```ansi\n{}\n```", neutralize_fences(text))),
        footer: format!(
            "{} | {}",
            theme.panel_identity,
            now.format("%Y-%m-%d %H:%M:%S")
        ),
    }
}
