use clap::Subcommand;
use serde::Serialize;
use habitgarden_core::EvolutionStage;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Current streak and evolution stage for one habit
    Streak {
        /// Habit id (e.g. "e1", "b3")
        habit_id: String,
    },
    /// Per-day completion counts over the window
    Momentum {
        /// Window size in days
        #[arg(long)]
        days: Option<usize>,
    },
    /// Aggregate window summary
    Summary {
        /// Window size in days
        #[arg(long)]
        days: Option<usize>,
    },
}

#[derive(Serialize)]
struct StreakReport {
    habit_id: String,
    streak: u32,
    stage: u8,
    stage_name: &'static str,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = super::open_tracker()?;

    match action {
        StatsAction::Streak { habit_id } => {
            let streak = tracker.streak(&habit_id)?;
            let stage = EvolutionStage::for_streak(streak);
            let report = StreakReport {
                habit_id,
                streak,
                stage: stage.level(),
                stage_name: stage.description(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Momentum { days } => {
            let points = tracker.momentum_window(super::window_days(days))?;
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        StatsAction::Summary { days } => {
            let summary = tracker.window_summary(super::window_days(days))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
