//! Rolling-window aggregation over the completion log.

use serde::{Deserialize, Serialize};

use crate::date::format_short;
use crate::error::{CoreError, Result};
use crate::habit::Habit;
use crate::state::DailyLog;

/// One day of the momentum series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MomentumPoint {
    /// Canonical date key
    pub date: String,
    /// Short display label, e.g. `"Jan 07"`
    pub label: String,
    /// Habits (of either kind) marked done that day
    pub completions: u32,
}

fn completions_for(habits: &[Habit], logs: &DailyLog, date_key: &str) -> u32 {
    habits
        .iter()
        .filter(|h| {
            logs.get(date_key)
                .and_then(|day| day.get(&h.id))
                .copied()
                .unwrap_or(false)
        })
        .count() as u32
}

/// Per-day completion counts over the given window. Output length and
/// order match `date_keys` exactly.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if any date key is malformed.
pub fn momentum(
    habits: &[Habit],
    logs: &DailyLog,
    date_keys: &[String],
) -> Result<Vec<MomentumPoint>> {
    date_keys
        .iter()
        .map(|key| {
            Ok(MomentumPoint {
                date: key.clone(),
                label: format_short(key)?,
                completions: completions_for(habits, logs, key),
            })
        })
        .collect()
}

/// Aggregate metrics over a fixed window of dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSummary {
    /// Completion ratio over the window, fixed two-decimal rendering
    pub avg_success: String,
    /// Total completions over the window
    pub total_volume: u32,
    /// Date key of the day with the most completions; ties go to the
    /// earliest date in the window
    pub peak_day: String,
}

impl WindowSummary {
    /// Compute the summary for a window of dates.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if the window or the habit
    /// collection is empty.
    pub fn over(habits: &[Habit], logs: &DailyLog, date_keys: &[String]) -> Result<Self> {
        if habits.is_empty() {
            return Err(CoreError::InvalidArgument(
                "habit collection must not be empty".into(),
            ));
        }
        if date_keys.is_empty() {
            return Err(CoreError::InvalidArgument(
                "summary window must not be empty".into(),
            ));
        }

        let counts: Vec<u32> = date_keys
            .iter()
            .map(|key| completions_for(habits, logs, key))
            .collect();

        let total_volume: u32 = counts.iter().sum();
        let possible = (habits.len() * date_keys.len()) as f64;
        let avg_success = format!("{:.2}", f64::from(total_volume) / possible);

        // strict comparison keeps the earliest date on ties
        let mut peak_idx = 0;
        for (idx, &count) in counts.iter().enumerate() {
            if count > counts[peak_idx] {
                peak_idx = idx;
            }
        }

        Ok(Self {
            avg_success,
            total_volume,
            peak_day: date_keys[peak_idx].clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::date_keys_for_last_n;
    use crate::habit::default_habits;
    use crate::state::AppState;

    #[test]
    fn empty_log_is_all_zeros() {
        let habits = default_habits();
        let window = date_keys_for_last_n("2026-01-07", 14).unwrap();
        let points = momentum(&habits, &DailyLog::new(), &window).unwrap();
        assert_eq!(points.len(), 14);
        assert!(points.iter().all(|p| p.completions == 0));
        assert_eq!(points[0].date, "2025-12-25");
        assert_eq!(points[0].label, "Dec 25");

        let summary = WindowSummary::over(&habits, &DailyLog::new(), &window).unwrap();
        assert_eq!(summary.avg_success, "0.00");
        assert_eq!(summary.total_volume, 0);
        // all-zero window: earliest date wins the tie
        assert_eq!(summary.peak_day, "2025-12-25");
    }

    #[test]
    fn counts_follow_window_order() {
        let state = AppState::default()
            .toggled("e1", "2026-01-06")
            .toggled("e2", "2026-01-06")
            .toggled("b1", "2026-01-07");
        let window = date_keys_for_last_n("2026-01-07", 3).unwrap();
        let points = momentum(&state.habits, &state.logs, &window).unwrap();
        let counts: Vec<u32> = points.iter().map(|p| p.completions).collect();
        assert_eq!(counts, vec![0, 2, 1]);
    }

    #[test]
    fn summary_averages_over_habits_and_days() {
        // 2 habits, 2 days, 2 completions => ratio 0.50
        let habits = vec![
            crate::habit::Habit::new("e1", "A", crate::habit::HabitKind::Essential),
            crate::habit::Habit::new("b1", "B", crate::habit::HabitKind::Bad),
        ];
        let logs = AppState::default()
            .toggled("e1", "2026-01-06")
            .toggled("b1", "2026-01-07")
            .logs;
        let window = date_keys_for_last_n("2026-01-07", 2).unwrap();
        let summary = WindowSummary::over(&habits, &logs, &window).unwrap();
        assert_eq!(summary.avg_success, "0.50");
        assert_eq!(summary.total_volume, 2);
    }

    #[test]
    fn peak_day_prefers_earliest_on_tie() {
        let state = AppState::default()
            .toggled("e1", "2026-01-05")
            .toggled("e1", "2026-01-07");
        let window = date_keys_for_last_n("2026-01-07", 3).unwrap();
        let summary = WindowSummary::over(&state.habits, &state.logs, &window).unwrap();
        assert_eq!(summary.peak_day, "2026-01-05");
    }

    #[test]
    fn peak_day_picks_maximum() {
        let state = AppState::default()
            .toggled("e1", "2026-01-05")
            .toggled("e1", "2026-01-06")
            .toggled("e2", "2026-01-06");
        let window = date_keys_for_last_n("2026-01-07", 3).unwrap();
        let summary = WindowSummary::over(&state.habits, &state.logs, &window).unwrap();
        assert_eq!(summary.peak_day, "2026-01-06");
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let habits = default_habits();
        let window = date_keys_for_last_n("2026-01-07", 3).unwrap();
        assert!(WindowSummary::over(&habits, &DailyLog::new(), &[]).is_err());
        assert!(WindowSummary::over(&[], &DailyLog::new(), &window).is_err());
    }
}
