pub mod config;
pub mod habit;
pub mod setup;
pub mod show;
pub mod stats;
pub mod track;

use habitgarden_core::{Config, JsonFileStore, Tracker};

/// Open the tracker over the default on-disk store, with the reference
/// date taken from configuration.
pub(crate) fn open_tracker() -> Result<Tracker<JsonFileStore>, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    Ok(Tracker::open_default(config.today)?)
}

/// Window size for analytics commands: explicit flag or configured default.
pub(crate) fn window_days(days: Option<usize>) -> usize {
    days.unwrap_or_else(|| Config::load_or_default().window_days as usize)
}
