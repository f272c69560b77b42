pub mod model;
pub mod platform;
pub mod reply;

pub use model::{
    ActionKind, ActionResult, Actor, ArgValue, Argument, GuildSnapshot, Invocation, TargetMember,
    UserProfile,
};
pub use platform::{Entropy, Platform};
pub use reply::{Panel, PanelKind, Reply, ReplyBody};

pub type Error = anyhow::Error;
