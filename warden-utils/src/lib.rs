/// Embed conversion for themed panels.
pub mod embed;
/// Random draws backed by the thread-local generator.
pub mod entropy;
/// Permission and role-hierarchy helpers.
pub mod permissions;
/// Presence rotation state.
pub mod presence;
/// Terminal-style text formatters.
pub mod terminal;
/// Theme definitions for the terminal and nexus variants.
pub mod theme;
/// Shared time helpers.
pub mod time;
