//! View tags exchanged with the presentation layer.
//!
//! Which view is active is purely presentation state and is never
//! persisted; the core only validates the tags at the parse boundary.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Track,
    Analytics,
    Nursery,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Track => "track",
            View::Analytics => "analytics",
            View::Nursery => "nursery",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "track" => Ok(View::Track),
            "analytics" => Ok(View::Analytics),
            "nursery" => Ok(View::Nursery),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown view tag '{other}'"
            ))),
        }
    }
}

/// Sub-view within the analytics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsSubView {
    Momentum,
    Matrix,
}

impl AnalyticsSubView {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalyticsSubView::Momentum => "momentum",
            AnalyticsSubView::Matrix => "matrix",
        }
    }
}

impl fmt::Display for AnalyticsSubView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsSubView {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "momentum" => Ok(AnalyticsSubView::Momentum),
            "matrix" => Ok(AnalyticsSubView::Matrix),
            other => Err(CoreError::InvalidArgument(format!(
                "unknown analytics sub-view '{other}'"
            ))),
        }
    }
}
