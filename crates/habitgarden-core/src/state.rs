//! The habit log store: persisted application state and its mutation
//! contracts.
//!
//! Every mutation returns a new [`AppState`] value and leaves the input
//! untouched, so readers holding an older version never observe a torn
//! update. The completion log is sparse: an absent date or habit entry
//! reads as "not done", never as an error.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::date::DEFAULT_TODAY;
use crate::error::{CoreError, Result};
use crate::habit::{default_habits, Habit};

/// Sparse completion log: date key -> habit id -> done flag.
pub type DailyLog = BTreeMap<String, BTreeMap<String, bool>>;

/// The whole application state. This is the unit of persistence: it is
/// serialized wholesale as a single JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Habit definitions in display order
    pub habits: Vec<Habit>,
    /// Per-date, per-habit completion flags
    #[serde(default)]
    pub logs: DailyLog,
    /// Whether the one-time setup flow has completed
    pub initialized: bool,
    /// Date key on which tracking began (stored fact, not used in
    /// derivations)
    pub start_date: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_start_date(DEFAULT_TODAY)
    }
}

impl AppState {
    /// Fresh first-run state: default habit set, empty log, setup pending.
    pub fn with_start_date(start_date: impl Into<String>) -> Self {
        Self {
            habits: default_habits(),
            logs: DailyLog::new(),
            initialized: false,
            start_date: start_date.into(),
        }
    }

    /// Whether the habit was marked done on the given date. Total over
    /// any ids and keys: unknown habits and absent dates read as `false`.
    pub fn is_done(&self, habit_id: &str, date_key: &str) -> bool {
        self.logs
            .get(date_key)
            .and_then(|day| day.get(habit_id))
            .copied()
            .unwrap_or(false)
    }

    /// Number of habits marked done on the given date.
    pub fn completions_on(&self, date_key: &str) -> usize {
        self.habits
            .iter()
            .filter(|h| self.is_done(&h.id, date_key))
            .count()
    }

    /// Flip the completion flag for `(date_key, habit_id)`, treating an
    /// absent cell as `false` before the flip. Returns a new state; the
    /// input is untouched. Applying twice with identical arguments
    /// restores the original cell value.
    pub fn toggled(&self, habit_id: &str, date_key: &str) -> AppState {
        let mut next = self.clone();
        let day = next.logs.entry(date_key.to_string()).or_default();
        let flag = day.entry(habit_id.to_string()).or_insert(false);
        *flag = !*flag;
        next
    }

    /// Replace the habit collection, leaving the log untouched. Used by
    /// the setup flow.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if the collection is empty
    /// or contains duplicate ids.
    pub fn with_habits(&self, habits: Vec<Habit>) -> Result<AppState> {
        if habits.is_empty() {
            return Err(CoreError::InvalidArgument(
                "habit collection must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for habit in &habits {
            if !seen.insert(habit.id.as_str()) {
                return Err(CoreError::InvalidArgument(format!(
                    "duplicate habit id '{}'",
                    habit.id
                )));
            }
        }
        let mut next = self.clone();
        next.habits = habits;
        Ok(next)
    }

    /// Complete the one-time setup: install the (possibly renamed) habit
    /// collection and mark the state initialized. One-way transition.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if setup already completed
    /// or the collection is invalid.
    pub fn completed_setup(&self, habits: Vec<Habit>) -> Result<AppState> {
        if self.initialized {
            return Err(CoreError::InvalidArgument(
                "setup has already completed".into(),
            ));
        }
        let mut next = self.with_habits(habits)?;
        next.initialized = true;
        Ok(next)
    }

    /// Look up a habit definition by id.
    pub fn habit(&self, habit_id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == habit_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::HabitKind;
    use proptest::prelude::*;

    #[test]
    fn absent_cells_read_as_false() {
        let state = AppState::default();
        assert!(!state.is_done("e1", "2026-01-07"));
        assert!(!state.is_done("no-such-habit", "2026-01-07"));

        let state = state.toggled("e1", "2026-01-07");
        // date entry now exists, but other habits still default to false
        assert!(!state.is_done("e2", "2026-01-07"));
    }

    #[test]
    fn toggle_does_not_mutate_input() {
        let original = AppState::default();
        let toggled = original.toggled("e1", "2026-01-07");
        assert!(!original.is_done("e1", "2026-01-07"));
        assert!(toggled.is_done("e1", "2026-01-07"));
    }

    #[test]
    fn toggle_is_an_involution_per_cell() {
        let state = AppState::default();
        let twice = state
            .toggled("e1", "2026-01-07")
            .toggled("e1", "2026-01-07");
        assert_eq!(
            twice.is_done("e1", "2026-01-07"),
            state.is_done("e1", "2026-01-07")
        );
    }

    #[test]
    fn completions_counts_across_kinds() {
        let state = AppState::default()
            .toggled("e1", "2026-01-07")
            .toggled("b1", "2026-01-07")
            .toggled("e2", "2026-01-06");
        assert_eq!(state.completions_on("2026-01-07"), 2);
        assert_eq!(state.completions_on("2026-01-06"), 1);
        assert_eq!(state.completions_on("2026-01-05"), 0);
    }

    #[test]
    fn with_habits_preserves_order_and_pairing() {
        let state = AppState::default();
        let mut habits = default_habits();
        habits[0].name = "Morning Pages".to_string();
        let next = state.with_habits(habits.clone()).unwrap();
        assert_eq!(next.habits, habits);
        assert_eq!(next.habits[0].id, "e1");
        assert_eq!(next.habits[0].kind, HabitKind::Essential);
        // log untouched
        assert_eq!(next.logs, state.logs);
    }

    #[test]
    fn with_habits_rejects_duplicates_and_empty() {
        let state = AppState::default();
        let dup = vec![
            Habit::new("e1", "A", HabitKind::Essential),
            Habit::new("e1", "B", HabitKind::Essential),
        ];
        assert!(state.with_habits(dup).is_err());
        assert!(state.with_habits(Vec::new()).is_err());
    }

    #[test]
    fn setup_completes_exactly_once() {
        let state = AppState::default();
        assert!(!state.initialized);
        let ready = state.completed_setup(default_habits()).unwrap();
        assert!(ready.initialized);
        assert!(ready.completed_setup(default_habits()).is_err());
    }

    #[test]
    fn serde_uses_reference_field_names() {
        let state = AppState::default().toggled("e1", "2026-01-07");
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("startDate").is_some());
        assert_eq!(json["logs"]["2026-01-07"]["e1"], true);
        assert_eq!(json["habits"][0]["type"], "essential");
    }

    #[test]
    fn serde_roundtrip_is_deep_equal() {
        let state = AppState::default()
            .toggled("e1", "2026-01-07")
            .toggled("b3", "2025-12-31")
            .completed_setup(default_habits())
            .unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_cell(
            habit_id in "[a-z][a-z0-9]{0,8}",
            day in 0u32..40_000,
        ) {
            let date = chrono::NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
                + chrono::Duration::days(day as i64);
            let key = crate::date::to_date_key(date);
            let state = AppState::default();
            let before = state.is_done(&habit_id, &key);
            let after = state.toggled(&habit_id, &key).toggled(&habit_id, &key);
            prop_assert_eq!(after.is_done(&habit_id, &key), before);
        }
    }
}
