use std::time::Duration;

use rand::Rng;

const MIN_ROTATION_DELAY_MS: u64 = 10_000;
const MAX_ROTATION_DELAY_MS: u64 = 30_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Listening,
    Watching,
    Competing,
}

impl ActivityKind {
    pub fn verb(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Listening => "Listening to",
            Self::Watching => "Watching",
            Self::Competing => "Competing in",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenceEntry {
    pub label: &'static str,
    pub kind: ActivityKind,
}

impl PresenceEntry {
    pub const fn new(label: &'static str, kind: ActivityKind) -> Self {
        Self { label, kind }
    }

    /// Human readable form used in logs, e.g. `Watching the server`.
    pub fn describe(&self) -> String {
        format!("{} {}", self.kind.verb(), self.label)
    }
}

/// Cyclic cursor over a fixed presence list.
#[derive(Debug)]
pub struct PresenceCycle {
    entries: &'static [PresenceEntry],
    index: usize,
}

impl PresenceCycle {
    pub fn new(entries: &'static [PresenceEntry]) -> Self {
        Self { entries, index: 0 }
    }

    /// Return the current entry and step to the next one, wrapping at the end.
    pub fn advance(&mut self) -> Option<PresenceEntry> {
        let entry = self.entries.get(self.index).copied()?;
        self.index = (self.index + 1) % self.entries.len();
        Some(entry)
    }
}

/// Delay before the next rotation, uniform in `[10s, 30s)`.
pub fn next_rotation_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(MIN_ROTATION_DELAY_MS..MAX_ROTATION_DELAY_MS))
}
