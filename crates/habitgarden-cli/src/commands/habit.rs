use clap::Subcommand;
use habitgarden_core::HabitKind;

#[derive(Subcommand)]
pub enum HabitAction {
    /// List habit definitions
    List {
        /// Filter by kind: "essential" or "bad"
        #[arg(long)]
        kind: Option<String>,
    },
}

fn parse_kind(tag: &str) -> Result<HabitKind, Box<dyn std::error::Error>> {
    match tag {
        "essential" => Ok(HabitKind::Essential),
        "bad" => Ok(HabitKind::Bad),
        other => Err(format!("unknown habit kind '{other}'").into()),
    }
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = super::open_tracker()?;

    match action {
        HabitAction::List { kind } => {
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let habits: Vec<_> = tracker
                .state()
                .habits
                .iter()
                .filter(|h| kind.map_or(true, |k| h.kind == k))
                .collect();
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
    }
    Ok(())
}
