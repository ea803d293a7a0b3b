use clap::Subcommand;

#[derive(Subcommand)]
pub enum SetupAction {
    /// Show the habit list pending setup
    Show,
    /// Rename a habit (only before setup completes)
    Rename {
        /// Habit id (e.g. "e1", "b3")
        id: String,
        /// New display name
        name: String,
    },
    /// Finish the one-time setup and start tracking
    Complete,
}

pub fn run(action: SetupAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = super::open_tracker()?;

    match action {
        SetupAction::Show => {
            let state = tracker.state();
            if state.initialized {
                println!("Setup already completed (tracking since {}).", state.start_date);
            } else {
                println!("Setup pending. Rename habits, then run 'setup complete'.");
            }
            for habit in &state.habits {
                println!("  {}  {}", habit.id, habit.name);
            }
        }
        SetupAction::Rename { id, name } => {
            tracker.rename_habit(&id, &name)?;
            println!("Renamed {id} to '{name}'.");
        }
        SetupAction::Complete => {
            tracker.complete_setup()?;
            println!("Setup complete. Tracking since {}.", tracker.state().start_date);
        }
    }
    Ok(())
}
