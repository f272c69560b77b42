use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use warden_core::{Entropy, TargetMember};

/// Draws above this apply the jitter.
const JITTER_GATE: f64 = 0.7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThreatLevel {
    Minimal,
    Low,
    Moderate,
    Elevated,
    High,
    Critical,
}

impl ThreatLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::Minimal,
            1 => Self::Low,
            2 => Self::Moderate,
            3 => Self::Elevated,
            4 => Self::High,
            _ => Self::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Minimal => "MINIMAL",
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::Elevated => "ELEVATED",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    /// Human-readable names of the signals that fired.
    pub indicators: Vec<&'static str>,
    pub base: u8,
    pub jitter: u8,
    pub level: ThreatLevel,
}

impl Assessment {
    pub fn score(&self) -> u8 {
        self.base + self.jitter
    }
}

/// Deterministic part of the score.
///
/// +2 for an account younger than a week, +1 for joining within the last
/// day, +1 for holding fewer than two roles. An unknown join time adds
/// nothing.
pub fn indicators(member: &TargetMember, now: DateTime<Utc>) -> Vec<(&'static str, u8)> {
    let mut fired = Vec::new();

    if now - member.user.created_at < TimeDelta::days(7) {
        fired.push(("Account younger than 7 days", 2));
    }
    if member
        .joined_at
        .is_some_and(|joined| now - joined < TimeDelta::days(1))
    {
        fired.push(("Joined within the last day", 1));
    }
    if member.role_count < 2 {
        fired.push(("Fewer than 2 roles", 1));
    }

    fired
}

pub fn base_score(member: &TargetMember, now: DateTime<Utc>) -> u8 {
    indicators(member, now).iter().map(|(_, weight)| weight).sum()
}

/// Zero or one extra point. The first draw sets the magnitude, the second
/// decides whether it applies.
pub fn jitter(entropy: &dyn Entropy) -> u8 {
    let magnitude = entropy.unit();
    let gate = entropy.unit();

    if gate > JITTER_GATE {
        (magnitude * 2.0).floor().clamp(0.0, 1.0) as u8
    } else {
        0
    }
}

pub fn assess(member: &TargetMember, now: DateTime<Utc>, entropy: &dyn Entropy) -> Assessment {
    let fired = indicators(member, now);
    let base = fired.iter().map(|(_, weight)| weight).sum();
    let jitter = jitter(entropy);

    Assessment {
        indicators: fired.into_iter().map(|(name, _)| name).collect(),
        base,
        jitter,
        level: ThreatLevel::from_score(base + jitter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedEntropy, fixed_now, member};

    fn fresh_account() -> TargetMember {
        let mut target = member(7, "newcomer");
        target.user.created_at = fixed_now() - TimeDelta::days(2);
        target.joined_at = Some(fixed_now() - TimeDelta::hours(3));
        target.role_count = 0;
        target
    }

    #[test]
    fn settled_member_scores_minimal() {
        let target = member(7, "regular");
        assert_eq!(base_score(&target, fixed_now()), 0);
        assert_eq!(
            assess(&target, fixed_now(), &FixedEntropy(0.0)).level,
            ThreatLevel::Minimal
        );
    }

    #[test]
    fn every_signal_fires_for_a_fresh_account() {
        let target = fresh_account();
        assert_eq!(base_score(&target, fixed_now()), 4);
        assert_eq!(indicators(&target, fixed_now()).len(), 3);
    }

    #[test]
    fn unknown_join_time_is_ignored() {
        let mut target = fresh_account();
        target.joined_at = None;
        assert_eq!(base_score(&target, fixed_now()), 3);
    }

    #[test]
    fn jitter_needs_the_gate() {
        assert_eq!(jitter(&FixedEntropy(0.0)), 0);
        assert_eq!(jitter(&FixedEntropy(0.6)), 0);
        assert_eq!(jitter(&FixedEntropy(0.7)), 0);
        assert_eq!(jitter(&FixedEntropy(0.9)), 1);
    }

    #[test]
    fn scores_clamp_to_critical() {
        let assessment = assess(&fresh_account(), fixed_now(), &FixedEntropy(0.9));
        assert_eq!(assessment.score(), 5);
        assert_eq!(assessment.level, ThreatLevel::Critical);
        assert_eq!(ThreatLevel::from_score(9), ThreatLevel::Critical);
    }

    #[test]
    fn level_labels() {
        let labels: Vec<_> = (0..=5).map(|score| ThreatLevel::from_score(score).label()).collect();
        assert_eq!(
            labels,
            ["MINIMAL", "LOW", "MODERATE", "ELEVATED", "HIGH", "CRITICAL"]
        );
    }
}
