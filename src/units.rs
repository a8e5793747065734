//! Static unit data: ordered time units for duration breakdowns and the
//! unit groups used for scale selection.
//!
//! The built-in table is available through [`UnitTable::standard`]. A custom
//! table can be deserialized from JSON with [`UnitTable::from_json`]; every
//! component borrows the table it works with, so nothing here is mutable
//! after construction.
//!
//! # Examples
//!
//! ```rust
//! use unitfmt::units::UnitTable;
//!
//! let table = UnitTable::standard();
//! let digital = table.group_for_unit("kilobyte").unwrap();
//! assert_eq!(digital.name, "digital");
//! assert_eq!(digital.unit("kilobyte").unwrap().base_value, 1024.0);
//! ```

use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::{Error, Result};

static STANDARD: OnceLock<UnitTable> = OnceLock::new();

/// Display style requested from the message resolver.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    #[default]
    Long,
    Short,
    Narrow,
}

impl FromStr for Style {
    type Err = Error;

    /// Fails with [`Error::InvalidStyle`] for anything but `long`, `short` or `narrow`.
    fn from_str(s: &str) -> Result<Self> {
        Style::iter()
            .find(|style| style.as_ref() == s)
            .ok_or_else(|| Error::InvalidStyle {
                style: s.to_string(),
                group: None,
            })
    }
}

impl TryFrom<String> for Style {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.to_string()
    }
}

/// A single unit, sized in its group's base unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    pub base_value: f64,
    /// Placeholder used for this unit in duration patterns (`hh`, `mm`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Unit {
    pub fn new(name: impl Into<String>, base_value: f64) -> Self {
        Self {
            name: name.into(),
            base_value,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Units sharing a base unit, ordered smallest to largest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitGroup {
    pub name: String,
    pub units: Vec<Unit>,
    pub styles: Vec<Style>,
    /// Fraction of the next unit at which a magnitude is promoted to it.
    pub rounding_factor: f64,
}

impl UnitGroup {
    /// Looks up a member unit by name.
    pub fn unit(&self, name: &str) -> Result<&Unit> {
        self.units
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| Error::UnknownUnit(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.iter().any(|u| u.name == name)
    }

    pub fn allows(&self, style: Style) -> bool {
        self.styles.contains(&style)
    }

    /// Fails with [`Error::InvalidStyle`] unless `style` is allowed for this group.
    pub fn check_style(&self, style: Style) -> Result<()> {
        if self.allows(style) {
            Ok(())
        } else {
            Err(Error::InvalidStyle {
                style: style.to_string(),
                group: Some(self.name.clone()),
            })
        }
    }

    /// The style used when the caller doesn't ask for one.
    pub fn default_style(&self) -> Style {
        self.styles.first().copied().unwrap_or_default()
    }
}

/// The full unit registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTable {
    /// Duration breakdown units, largest first.
    pub time: Vec<Unit>,
    pub groups: Vec<UnitGroup>,
}

impl Default for UnitTable {
    fn default() -> Self {
        const KB: f64 = 1024.0;

        Self {
            time: vec![
                Unit::new("hour", 3_600_000.0).with_token("hh"),
                Unit::new("minute", 60_000.0).with_token("mm"),
                Unit::new("second", 1_000.0).with_token("ss"),
                // milliseconds are displayed in tens
                Unit::new("millisecond", 10.0).with_token("SS"),
            ],
            groups: vec![
                UnitGroup {
                    name: "duration".into(),
                    units: vec![
                        Unit::new("second", 1.0),
                        Unit::new("minute", 60.0),
                        Unit::new("hour", 3_600.0),
                        Unit::new("day", 86_400.0),
                        Unit::new("month", 2_592_000.0),
                    ],
                    styles: vec![Style::Narrow],
                    rounding_factor: 1.0,
                },
                UnitGroup {
                    name: "digital".into(),
                    units: vec![
                        Unit::new("byte", 1.0),
                        Unit::new("kilobyte", KB),
                        Unit::new("megabyte", KB * KB),
                        Unit::new("gigabyte", KB * KB * KB),
                        Unit::new("terabyte", KB * KB * KB * KB),
                    ],
                    styles: vec![Style::Short],
                    rounding_factor: 0.8,
                },
            ],
        }
    }
}

impl UnitTable {
    /// Returns the built-in table.
    pub fn standard() -> &'static UnitTable {
        STANDARD.get_or_init(UnitTable::default)
    }

    /// Deserializes a table from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Finds a duration unit, returning its position in unit order.
    pub fn time_unit(&self, name: &str) -> Result<(usize, &Unit)> {
        self.time
            .iter()
            .enumerate()
            .find(|(_, u)| u.name == name)
            .ok_or_else(|| Error::UnknownUnit(name.to_string()))
    }

    /// Resolves a `max..=min` range of duration units.
    ///
    /// Fails with [`Error::InvalidRange`] when `max_unit` is smaller than `min_unit`.
    pub fn time_range(&self, max_unit: &str, min_unit: &str) -> Result<&[Unit]> {
        let (max_idx, _) = self.time_unit(max_unit)?;
        let (min_idx, _) = self.time_unit(min_unit)?;
        if max_idx > min_idx {
            return Err(Error::invalid_range(max_unit, min_unit));
        }
        Ok(&self.time[max_idx..=min_idx])
    }

    /// Finds a group by its own name.
    pub fn group(&self, name: &str) -> Result<&UnitGroup> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| Error::UnknownUnit(name.to_string()))
    }

    /// Finds the first group containing `unit`.
    pub fn group_for_unit(&self, unit: &str) -> Result<&UnitGroup> {
        self.groups
            .iter()
            .find(|g| g.contains(unit))
            .ok_or_else(|| Error::UnknownUnit(unit.to_string()))
    }
}
