//! Statistics module for Habit Garden
//!
//! Pure derivations over the completion log: streak length, evolution
//! stage, and rolling-window momentum/summary analytics. Given valid
//! date keys these functions never fail; missing log data always reads
//! as "not done".

mod momentum;
mod streak;

pub use momentum::{momentum, MomentumPoint, WindowSummary};
pub use streak::{streak, EvolutionStage, STREAK_WALK_CAP};
