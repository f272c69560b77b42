use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use warden_core::{Invocation, Reply};
use warden_utils::theme::{ReplyMode, Theme};

use crate::context::CommandContext;
use crate::delivery::{ReplySink, Responder};
use crate::handler::CommandHandler;
use crate::replies;

/// Routes invocations by command name to exactly one handler.
pub struct Dispatcher {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
    /// Commands whose deferral is ephemeral.
    private: HashSet<&'static str>,
}

impl Dispatcher {
    pub fn new(
        handlers: impl IntoIterator<Item = (&'static str, Arc<dyn CommandHandler>)>,
    ) -> Self {
        Self {
            handlers: handlers.into_iter().collect(),
            private: HashSet::new(),
        }
    }

    /// Handlers for the commands `theme` registers.
    pub fn for_theme(theme: &Theme) -> Self {
        let commands = crate::registered_commands(theme);
        let enabled: HashSet<&str> = commands.iter().map(|meta| meta.name).collect();

        Self {
            private: commands
                .iter()
                .filter(|meta| meta.mutates_guild())
                .map(|meta| meta.name)
                .collect(),
            ..Self::new(
                crate::handlers()
                    .into_iter()
                    .filter(|(name, _)| enabled.contains(name)),
            )
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn is_private(&self, command: &str) -> bool {
        self.private.contains(command)
    }

    /// Run the handler for `invocation` and return its reply. Unknown
    /// commands and handler failures both become error panels.
    pub async fn dispatch(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Reply {
        let Some(handler) = self.handlers.get(invocation.command.as_str()) else {
            info!(command = %invocation.command, "unknown command invocation");
            return replies::unknown_command(ctx);
        };

        match handler.run(ctx, invocation).await {
            Ok(reply) => reply,
            Err(source) => {
                error!(?source, command = %invocation.command, "command execution failed");
                replies::execution_error(ctx, &source.to_string())
            }
        }
    }

    /// Dispatch and deliver exactly one reply through `sink`.
    pub async fn handle(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation,
        sink: &dyn ReplySink,
    ) {
        info!(
            actor = %invocation.actor.tag,
            command = %invocation.command,
            guild = %invocation.location(),
            "command invoked"
        );

        let mut responder = Responder::new(sink);
        if ctx.theme.reply_mode == ReplyMode::Deferred {
            let ephemeral = self.is_private(&invocation.command);
            responder.defer(ephemeral).await;
        }

        let reply = self.dispatch(ctx, invocation).await;
        let delivered = responder
            .deliver(&reply, || {
                replies::execution_error(ctx, "the reply could not be delivered")
            })
            .await;

        if let Err(source) = delivered {
            error!(?source, command = %invocation.command, "no reply could be delivered");
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut private: Vec<_> = self.private.iter().copied().collect();
        private.sort_unstable();

        f.debug_struct("Dispatcher")
            .field("commands", &self.command_names())
            .field("private", &private)
            .finish()
    }
}
