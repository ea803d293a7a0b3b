use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitgarden", version, about = "Habit Garden CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// One-time setup flow
    Setup {
        #[command(subcommand)]
        action: commands::setup::SetupAction,
    },
    /// Daily completion tracking
    Track {
        #[command(subcommand)]
        action: commands::track::TrackAction,
    },
    /// Render a view (track, analytics, nursery)
    Show {
        /// View tag
        view: String,
        /// Analytics sub-view tag (momentum or matrix)
        #[arg(long, default_value = "momentum")]
        sub: String,
        /// Window size in days (defaults to the configured window)
        #[arg(long)]
        days: Option<usize>,
    },
    /// Streaks and analytics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Habit definitions
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Setup { action } => commands::setup::run(action),
        Commands::Track { action } => commands::track::run(action),
        Commands::Show { view, sub, days } => commands::show::run(&view, &sub, days),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
