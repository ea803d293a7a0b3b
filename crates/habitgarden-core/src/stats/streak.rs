//! Streak calculation and evolution-stage mapping.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::date::{parse_date_key, to_date_key};
use crate::error::Result;
use crate::state::DailyLog;

/// Hard ceiling on the backward streak walk, in days (~10 years).
/// Protects against unbounded loops over pathological log data; within
/// normal data ranges the walk stops at the first not-done day long
/// before the cap.
pub const STREAK_WALK_CAP: u32 = 3650;

/// Count consecutive done days for a habit, walking backward from the
/// most recent eligible day. If `today` is marked done the walk starts
/// there; otherwise it starts at the previous day, so an undone "today"
/// neither counts toward nor breaks a streak built on prior days.
///
/// # Errors
///
/// Returns [`crate::error::CoreError::InvalidArgument`] if `today` is
/// malformed.
pub fn streak(habit_id: &str, logs: &DailyLog, today: &str) -> Result<u32> {
    let today = parse_date_key(today)?;
    let done = |date| {
        logs.get(&to_date_key(date))
            .and_then(|day| day.get(habit_id))
            .copied()
            .unwrap_or(false)
    };

    let mut current = if done(today) {
        today
    } else {
        today - Duration::days(1)
    };
    let mut count = 0u32;
    while count < STREAK_WALK_CAP && done(current) {
        count += 1;
        current = current - Duration::days(1);
    }
    Ok(count)
}

/// Three-tier display stage derived from the current streak value.
/// Monotonic in streak, no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionStage {
    /// Streak below 3
    Seedling,
    /// Streak 3 to 5
    Sprout,
    /// Streak 6 or more
    FullBloom,
}

impl EvolutionStage {
    /// Map a streak length to its stage.
    pub fn for_streak(streak: u32) -> Self {
        if streak >= 6 {
            EvolutionStage::FullBloom
        } else if streak >= 3 {
            EvolutionStage::Sprout
        } else {
            EvolutionStage::Seedling
        }
    }

    /// Numeric stage level, 1 to 3.
    pub fn level(self) -> u8 {
        match self {
            EvolutionStage::Seedling => 1,
            EvolutionStage::Sprout => 2,
            EvolutionStage::FullBloom => 3,
        }
    }

    /// Human-readable stage name.
    pub fn description(self) -> &'static str {
        match self {
            EvolutionStage::Seedling => "Seedling",
            EvolutionStage::Sprout => "Sprout",
            EvolutionStage::FullBloom => "Full Bloom",
        }
    }
}
