//! Cosmetic intelligence commands.

pub mod scan;
pub mod threat;
