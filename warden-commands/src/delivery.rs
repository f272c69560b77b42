use async_trait::async_trait;
use tracing::{error, warn};

use warden_core::{Error, Reply};

/// The reply mechanisms of a single interaction.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Acknowledge now and promise a reply later. An ephemeral deferral makes
    /// the eventual reply visible to the actor only.
    async fn defer(&self, ephemeral: bool) -> Result<(), Error>;
    /// Send the initial reply.
    async fn respond(&self, reply: &Reply) -> Result<(), Error>;
    /// Replace a deferred acknowledgement with the reply.
    async fn edit(&self, reply: &Reply) -> Result<(), Error>;
    /// Send an additional message after the initial reply.
    async fn follow_up(&self, reply: &Reply) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyState {
    Pending,
    Deferred,
    Sent,
}

/// Tracks which reply mechanism is still open for an interaction.
pub struct Responder<'a> {
    sink: &'a dyn ReplySink,
    state: ReplyState,
}

impl<'a> Responder<'a> {
    pub fn new(sink: &'a dyn ReplySink) -> Self {
        Self {
            sink,
            state: ReplyState::Pending,
        }
    }

    pub fn state(&self) -> ReplyState {
        self.state
    }

    /// Defer the reply. A failed defer leaves the interaction pending so the
    /// reply is sent as an initial response instead.
    pub async fn defer(&mut self, ephemeral: bool) {
        if self.state != ReplyState::Pending {
            return;
        }

        match self.sink.defer(ephemeral).await {
            Ok(()) => self.state = ReplyState::Deferred,
            Err(source) => warn!(?source, "failed to defer interaction reply"),
        }
    }

    /// Deliver `reply` through whichever mechanism is open. If that fails, the
    /// reply built by `fallback` goes out as the initial response when nothing
    /// has acknowledged the interaction yet, and as a follow-up otherwise.
    pub async fn deliver(
        &mut self,
        reply: &Reply,
        fallback: impl FnOnce() -> Reply + Send,
    ) -> Result<(), Error> {
        let primary = match self.state {
            ReplyState::Pending => self.sink.respond(reply).await,
            ReplyState::Deferred => self.sink.edit(reply).await,
            ReplyState::Sent => self.sink.follow_up(reply).await,
        };

        let Err(source) = primary else {
            self.state = ReplyState::Sent;
            return Ok(());
        };
        error!(?source, state = ?self.state, "failed to deliver interaction reply");

        let fallback = fallback();
        match self.state {
            ReplyState::Pending => self.sink.respond(&fallback).await?,
            ReplyState::Deferred | ReplyState::Sent => self.sink.follow_up(&fallback).await?,
        }
        self.state = ReplyState::Sent;
        Ok(())
    }
}
