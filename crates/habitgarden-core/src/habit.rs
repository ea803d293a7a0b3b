//! Habit definitions.

use serde::{Deserialize, Serialize};

/// Kind of habit being tracked.
///
/// For a bad habit, "done" records that the undesired behavior did NOT
/// occur; the distinction only matters to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitKind {
    /// A positive habit the user wants to reinforce
    Essential,
    /// A negative habit the user wants to suppress
    Bad,
}

/// A tracked habit. The `id` is stable and immutable after creation;
/// only the display name is user-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: HabitKind,
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: HabitKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// The product-default habit set: nine essentials and three bad habits,
/// in display order.
pub fn default_habits() -> Vec<Habit> {
    let essentials = [
        ("e1", "Gratitude"),
        ("e2", "Meditation"),
        ("e3", "Training"),
        ("e4", "Breakfast"),
        ("e5", "Pomodoro"),
        ("e6", "Dinner"),
        ("e7", "Planning"),
        ("e8", "Mindful Movement"),
        ("e9", "Journal"),
    ];
    let bad = [("b1", "Bad Food"), ("b2", "Drinking"), ("b3", "Screentime")];

    essentials
        .iter()
        .map(|(id, name)| Habit::new(*id, *name, HabitKind::Essential))
        .chain(
            bad.iter()
                .map(|(id, name)| Habit::new(*id, *name, HabitKind::Bad)),
        )
        .collect()
}
