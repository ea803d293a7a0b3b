use clap::Subcommand;
use habitgarden_core::date::date_keys_for_last_n;

#[derive(Subcommand)]
pub enum TrackAction {
    /// Flip a habit's completion flag
    Toggle {
        /// Habit id (e.g. "e1", "b3")
        habit_id: String,
        /// Date key (YYYY-MM-DD); defaults to the configured "today"
        #[arg(long)]
        date: Option<String>,
    },
    /// Show today's completion grid
    Today,
    /// Per-day completion grid over the last N days
    Log {
        /// Window size in days (defaults to the configured window)
        #[arg(long)]
        days: Option<usize>,
    },
}

pub fn run(action: TrackAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = super::open_tracker()?;

    match action {
        TrackAction::Toggle { habit_id, date } => {
            let done = tracker.toggle_completion(&habit_id, date.as_deref())?;
            let date = date.unwrap_or_else(|| tracker.today().to_string());
            println!(
                "{habit_id} is now {} on {date}",
                if done { "done" } else { "not done" }
            );
        }
        TrackAction::Today => {
            let state = tracker.state();
            let today = tracker.today();
            println!("{today}  ({}/{} done)", state.completions_on(today), state.habits.len());
            for habit in &state.habits {
                let mark = if state.is_done(&habit.id, today) { "x" } else { " " };
                println!("  [{mark}] {}  {}", habit.id, habit.name);
            }
        }
        TrackAction::Log { days } => {
            let state = tracker.state();
            let window = date_keys_for_last_n(tracker.today(), super::window_days(days))?;
            for key in &window {
                let marks: String = state
                    .habits
                    .iter()
                    .map(|h| if state.is_done(&h.id, key) { 'x' } else { '.' })
                    .collect();
                println!(
                    "{key}  {marks}  ({}/{})",
                    state.completions_on(key),
                    state.habits.len()
                );
            }
        }
    }
    Ok(())
}
