//! Plain-text rendering of the three application views.

use habitgarden_core::date::{date_keys_for_last_n, format_short};
use habitgarden_core::{AnalyticsSubView, HabitKind, View};

pub fn run(view: &str, sub: &str, days: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let view: View = view.parse()?;
    let tracker = super::open_tracker()?;

    match view {
        View::Track => {
            let state = tracker.state();
            let today = tracker.today();
            println!("TRACK  {}", format_short(today)?);
            for habit in &state.habits {
                let mark = if state.is_done(&habit.id, today) { "x" } else { " " };
                println!("  [{mark}] {}", habit.name);
            }
        }
        View::Analytics => {
            let sub: AnalyticsSubView = sub.parse()?;
            let days = super::window_days(days);
            match sub {
                AnalyticsSubView::Momentum => {
                    println!("MOMENTUM  last {days} days");
                    for point in tracker.momentum_window(days)? {
                        println!("  {}  {:>2}  {}", point.label, point.completions, "#".repeat(point.completions as usize));
                    }
                    let summary = tracker.window_summary(days)?;
                    println!(
                        "  avg {}  volume {}  peak {}",
                        summary.avg_success,
                        summary.total_volume,
                        format_short(&summary.peak_day)?
                    );
                }
                AnalyticsSubView::Matrix => {
                    let state = tracker.state();
                    let window = date_keys_for_last_n(tracker.today(), days)?;
                    println!("MATRIX  last {days} days");
                    for habit in &state.habits {
                        let row: String = window
                            .iter()
                            .map(|key| if state.is_done(&habit.id, key) { 'x' } else { '.' })
                            .collect();
                        println!("  {:>3} {row}", habit.id);
                    }
                }
            }
        }
        View::Nursery => {
            let state = tracker.state();
            println!("NURSERY");
            for habit in state.habits.iter().filter(|h| h.kind == HabitKind::Essential) {
                let streak = tracker.streak(&habit.id)?;
                let stage = tracker.stage(&habit.id)?;
                println!(
                    "  {}  streak {streak}  stage {}/3 ({})",
                    habit.name,
                    stage.level(),
                    stage.description()
                );
            }
        }
    }
    Ok(())
}
