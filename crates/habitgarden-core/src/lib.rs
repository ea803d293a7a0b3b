//! # Habit Garden Core Library
//!
//! This library provides the core business logic for Habit Garden, a
//! personal habit tracker. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary, with any
//! GUI being a thin presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Habit Log Store**: an immutable-per-version application state
//!   holding habit definitions and a sparse per-date completion log
//! - **Derivation Engine**: pure streak, evolution-stage, and
//!   rolling-window analytics over the log
//! - **Storage**: whole-state JSON persistence and TOML-based
//!   configuration
//! - **Tracker**: an explicit state container that wires mutations to
//!   synchronous persistence
//!
//! The reference "today" is an injected configuration value; the core
//! never reads the system clock, which keeps every derivation
//! deterministic.
//!
//! ## Key Components
//!
//! - [`AppState`]: the persisted state shape and its mutation contracts
//! - [`Tracker`]: state container + persistence hook
//! - [`Config`]: application configuration management
//! - [`StateStore`]: trait for persistence collaborators

pub mod date;
pub mod error;
pub mod habit;
pub mod state;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod view;

pub use error::{ConfigError, CoreError, Result, StorageError};
pub use habit::{default_habits, Habit, HabitKind};
pub use state::{AppState, DailyLog};
pub use stats::{momentum, streak, EvolutionStage, MomentumPoint, WindowSummary};
pub use storage::{Config, JsonFileStore, MemoryStore, StateStore};
pub use tracker::Tracker;
pub use view::{AnalyticsSubView, View};
