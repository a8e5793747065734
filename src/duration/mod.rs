//! Duration breakdowns.
//!
//! A duration is formatted in two halves: [`DurationSplitter`] turns the
//! millisecond value into per-unit magnitudes, and [`PatternTrimmer`] cuts the
//! localized `hh:mm:ss.SS` style pattern down to the requested units.

mod pattern;
mod split;

pub use pattern::{PatternField, PatternTrimmer, TrimmedPattern};
pub use split::{BreakdownEntry, DurationSplitter, UnitBreakdown};

use serde::{Deserialize, Serialize};

/// The largest and smallest unit to show, by time unit name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DurationSpec {
    pub max_unit: String,
    pub min_unit: String,
}

impl DurationSpec {
    pub fn new(max_unit: impl Into<String>, min_unit: impl Into<String>) -> Self {
        Self {
            max_unit: max_unit.into(),
            min_unit: min_unit.into(),
        }
    }
}

impl Default for DurationSpec {
    fn default() -> Self {
        Self::new("hour", "second")
    }
}
