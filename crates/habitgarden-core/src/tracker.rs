//! Explicit state container wiring mutations to persistence.
//!
//! The tracker holds the current [`AppState`] version and a
//! [`StateStore`] collaborator; every mutation builds the next version,
//! saves it synchronously, and then installs it. Readers holding a
//! reference to an older version are never affected. The reference
//! "today" is injected at construction and never read from the clock.

use crate::date;
use crate::error::{CoreError, Result, StorageError};
use crate::habit::Habit;
use crate::state::AppState;
use crate::stats::{self, EvolutionStage, MomentumPoint, WindowSummary};
use crate::storage::{JsonFileStore, StateStore};

pub struct Tracker<S: StateStore> {
    state: AppState,
    store: S,
    today: String,
}

impl<S: StateStore> Tracker<S> {
    /// Open from the store, creating and saving a default state when no
    /// record exists. A corrupt record is surfaced as an error; see
    /// [`Tracker::open_or_reset`] for the self-healing variant.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if `today` is malformed,
    /// or a storage error from the collaborator.
    pub fn open(store: S, today: impl Into<String>) -> Result<Self> {
        let today = today.into();
        date::parse_date_key(&today)?;
        let state = match store.load()? {
            Some(state) => state,
            None => {
                let state = AppState::with_start_date(&today);
                store.save(&state)?;
                state
            }
        };
        Ok(Self {
            state,
            store,
            today,
        })
    }

    /// Read-only view of the current state version.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The injected reference date.
    pub fn today(&self) -> &str {
        &self.today
    }

    /// Flip the completion flag for a habit, defaulting the date to the
    /// injected "today". Returns the new flag value.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if setup has not completed
    /// or the date key is malformed.
    pub fn toggle_completion(&mut self, habit_id: &str, date_key: Option<&str>) -> Result<bool> {
        self.require_initialized()?;
        let key = match date_key {
            Some(key) => {
                date::parse_date_key(key)?;
                key.to_string()
            }
            None => self.today.clone(),
        };
        let next = self.state.toggled(habit_id, &key);
        let now_done = next.is_done(habit_id, &key);
        self.install(next)?;
        Ok(now_done)
    }

    /// Rename a habit. Only allowed before setup completes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if setup already completed
    /// or the habit id is unknown.
    pub fn rename_habit(&mut self, habit_id: &str, name: &str) -> Result<()> {
        if self.state.initialized {
            return Err(CoreError::InvalidArgument(
                "habits can only be renamed before setup completes".into(),
            ));
        }
        if self.state.habit(habit_id).is_none() {
            return Err(CoreError::InvalidArgument(format!(
                "unknown habit id '{habit_id}'"
            )));
        }
        let habits: Vec<Habit> = self
            .state
            .habits
            .iter()
            .map(|h| {
                if h.id == habit_id {
                    Habit::new(h.id.clone(), name, h.kind)
                } else {
                    h.clone()
                }
            })
            .collect();
        let next = self.state.with_habits(habits)?;
        self.install(next)
    }

    /// Complete the one-time setup with the current habit collection.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidArgument`] if setup already completed.
    pub fn complete_setup(&mut self) -> Result<()> {
        let habits = self.state.habits.clone();
        let next = self.state.completed_setup(habits)?;
        self.install(next)
    }

    /// Current streak for a habit, ending at or just before "today".
    pub fn streak(&self, habit_id: &str) -> Result<u32> {
        self.require_initialized()?;
        stats::streak(habit_id, &self.state.logs, &self.today)
    }

    /// Evolution stage for a habit's current streak.
    pub fn stage(&self, habit_id: &str) -> Result<EvolutionStage> {
        Ok(EvolutionStage::for_streak(self.streak(habit_id)?))
    }

    /// Per-day completion counts over the last `days` days.
    pub fn momentum_window(&self, days: usize) -> Result<Vec<MomentumPoint>> {
        self.require_initialized()?;
        let window = date::date_keys_for_last_n(&self.today, days)?;
        stats::momentum(&self.state.habits, &self.state.logs, &window)
    }

    /// Aggregate summary over the last `days` days.
    pub fn window_summary(&self, days: usize) -> Result<WindowSummary> {
        self.require_initialized()?;
        let window = date::date_keys_for_last_n(&self.today, days)?;
        WindowSummary::over(&self.state.habits, &self.state.logs, &window)
    }

    fn require_initialized(&self) -> Result<()> {
        if self.state.initialized {
            Ok(())
        } else {
            Err(CoreError::InvalidArgument(
                "setup has not completed; run the setup flow first".into(),
            ))
        }
    }

    fn install(&mut self, next: AppState) -> Result<()> {
        self.store.save(&next)?;
        self.state = next;
        Ok(())
    }
}

impl Tracker<JsonFileStore> {
    /// Open the default on-disk store with the reset-to-defaults policy:
    /// a corrupt record is moved aside (`state.json.corrupt`) and
    /// replaced with a fresh default state. The unreadable document is
    /// preserved, never partially repaired.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unusable or `today`
    /// is malformed.
    pub fn open_default(today: impl Into<String>) -> Result<Self> {
        Self::open_or_reset(JsonFileStore::open_default()?, today)
    }

    /// [`Tracker::open`] plus the corrupt-record reset policy, for an
    /// explicit file store.
    pub fn open_or_reset(store: JsonFileStore, today: impl Into<String>) -> Result<Self> {
        let today = today.into();
        date::parse_date_key(&today)?;
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                let state = AppState::with_start_date(&today);
                store.save(&state)?;
                state
            }
            Err(CoreError::Storage(StorageError::Corrupt { .. })) => {
                store.quarantine()?;
                let state = AppState::with_start_date(&today);
                store.save(&state)?;
                state
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            state,
            store,
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn initialized_tracker() -> Tracker<MemoryStore> {
        let mut tracker = Tracker::open(MemoryStore::new(), "2026-01-07").unwrap();
        tracker.complete_setup().unwrap();
        tracker
    }

    #[test]
    fn first_run_saves_defaults() {
        let tracker = Tracker::open(MemoryStore::new(), "2026-01-07").unwrap();
        assert!(!tracker.state().initialized);
        assert_eq!(tracker.state().start_date, "2026-01-07");
        assert_eq!(tracker.state().habits.len(), 12);
    }

    #[test]
    fn malformed_today_is_rejected() {
        assert!(Tracker::open(MemoryStore::new(), "today").is_err());
    }

    #[test]
    fn toggle_defaults_to_today_and_persists() {
        let mut tracker = initialized_tracker();
        assert!(tracker.toggle_completion("e1", None).unwrap());
        assert!(tracker.state().is_done("e1", "2026-01-07"));

        let saved = tracker.store.snapshot().unwrap();
        assert!(saved.is_done("e1", "2026-01-07"));

        assert!(!tracker.toggle_completion("e1", None).unwrap());
        assert!(!tracker.state().is_done("e1", "2026-01-07"));
    }

    #[test]
    fn toggle_requires_setup() {
        let mut tracker = Tracker::open(MemoryStore::new(), "2026-01-07").unwrap();
        assert!(tracker.toggle_completion("e1", None).is_err());
    }

    #[test]
    fn toggle_rejects_malformed_date() {
        let mut tracker = initialized_tracker();
        assert!(tracker.toggle_completion("e1", Some("Jan 7")).is_err());
    }

    #[test]
    fn rename_only_before_setup() {
        let mut tracker = Tracker::open(MemoryStore::new(), "2026-01-07").unwrap();
        tracker.rename_habit("e1", "Morning Pages").unwrap();
        assert_eq!(tracker.state().habits[0].name, "Morning Pages");
        assert!(tracker.rename_habit("nope", "x").is_err());

        tracker.complete_setup().unwrap();
        assert!(tracker.rename_habit("e1", "Too Late").is_err());
    }

    #[test]
    fn setup_is_one_way() {
        let mut tracker = initialized_tracker();
        assert!(tracker.complete_setup().is_err());
    }

    #[test]
    fn derivations_flow_through_the_container() {
        let mut tracker = initialized_tracker();
        for key in ["2026-01-05", "2026-01-06", "2026-01-07"] {
            tracker.toggle_completion("e1", Some(key)).unwrap();
        }
        assert_eq!(tracker.streak("e1").unwrap(), 3);
        assert_eq!(tracker.stage("e1").unwrap(), EvolutionStage::Sprout);

        let points = tracker.momentum_window(14).unwrap();
        assert_eq!(points.len(), 14);
        assert_eq!(points.last().unwrap().completions, 1);

        let summary = tracker.window_summary(14).unwrap();
        assert_eq!(summary.total_volume, 3);
        assert_eq!(summary.peak_day, "2026-01-05");
    }
}
