//! Relative time selection ("3 minutes ago", "in 2 weeks").
//!
//! [`compute_units`] derives every calendar-ish unit count from a millisecond
//! offset, [`best_fit`] picks one of them for display, and [`resolve`] turns
//! the result into a message key and magnitude for the message resolver.

mod best_fit;
mod key;

pub use best_fit::{UnitCounts, best_fit, compute_units};
pub use key::{RelativeOptions, RelativeSelection, Tense, resolve};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::Error;

/// Units a relative time can be expressed in, smallest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl FromStr for RelativeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelativeUnit::iter()
            .find(|unit| unit.as_ref() == s)
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

impl TryFrom<String> for RelativeUnit {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RelativeUnit> for String {
    fn from(unit: RelativeUnit) -> Self {
        unit.to_string()
    }
}

/// Either a fixed unit or automatic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum UnitChoice {
    #[default]
    BestFit,
    Unit(RelativeUnit),
}

impl FromStr for UnitChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "bestFit" {
            return Ok(UnitChoice::BestFit);
        }
        s.parse().map(UnitChoice::Unit)
    }
}

impl TryFrom<String> for UnitChoice {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UnitChoice> for String {
    fn from(choice: UnitChoice) -> Self {
        choice.to_string()
    }
}

impl From<RelativeUnit> for UnitChoice {
    fn from(unit: RelativeUnit) -> Self {
        UnitChoice::Unit(unit)
    }
}

impl fmt::Display for UnitChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitChoice::BestFit => f.write_str("bestFit"),
            UnitChoice::Unit(unit) => write!(f, "{unit}"),
        }
    }
}
