#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    Info,
    Success,
    Error,
    Warn,
    Command,
}

/// A themed embed-style block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub description: Option<String>,
    pub footer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyBody {
    Content(String),
    Panel(Panel),
}

/// What a handler hands back to the dispatcher for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub body: ReplyBody,
    pub ephemeral: bool,
}

impl Reply {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            body: ReplyBody::Content(content.into()),
            ephemeral: false,
        }
    }

    /// Error panels are only shown to the invoking actor.
    pub fn panel(panel: Panel) -> Self {
        let ephemeral = panel.kind == PanelKind::Error;
        Self {
            body: ReplyBody::Panel(panel),
            ephemeral,
        }
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match &self.body {
            ReplyBody::Panel(panel) => Some(panel),
            ReplyBody::Content(_) => None,
        }
    }

    pub fn as_content(&self) -> Option<&str> {
        match &self.body {
            ReplyBody::Content(content) => Some(content),
            ReplyBody::Panel(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.as_panel()
            .is_some_and(|panel| panel.kind == PanelKind::Error)
    }
}
