use async_trait::async_trait;

use warden_core::{Error, Invocation, Reply};

use crate::context::CommandContext;

/// One slash command's behaviour.
///
/// Handlers never talk to the reply channel themselves: they return the
/// reply and the dispatcher delivers it. Rejections (missing permission,
/// bad arguments, unknown target) are `Ok` error panels; `Err` is reserved
/// for unexpected failures, which the dispatcher turns into an execution
/// error panel.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn run(&self, ctx: &CommandContext<'_>, invocation: &Invocation) -> Result<Reply, Error>;
}
