use serde::Serialize;

use crate::rounding::round_half_up;
use crate::units::UnitTable;
use crate::{Error, Result};

/// Magnitude of a single unit in a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub unit: String,
    pub magnitude: u64,
}

/// Per-unit magnitudes of a duration, largest unit first.
///
/// The sign of the original duration is not part of the breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnitBreakdown {
    entries: Vec<BreakdownEntry>,
}

impl UnitBreakdown {
    pub fn iter(&self) -> impl Iterator<Item = &BreakdownEntry> {
        self.entries.iter()
    }

    pub fn get(&self, unit: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.unit == unit)
            .map(|e| e.magnitude)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a UnitBreakdown {
    type Item = &'a BreakdownEntry;
    type IntoIter = std::slice::Iter<'a, BreakdownEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Splits millisecond durations into the time units of a [`UnitTable`].
#[derive(Debug, Clone, Copy)]
pub struct DurationSplitter<'t> {
    table: &'t UnitTable,
}

impl Default for DurationSplitter<'static> {
    fn default() -> Self {
        Self::new(UnitTable::standard())
    }
}

impl<'t> DurationSplitter<'t> {
    pub fn new(table: &'t UnitTable) -> Self {
        Self { table }
    }

    /// Splits `|duration_ms|` into every unit from `max_unit` to `min_unit`.
    ///
    /// The whole input is first rounded to the nearest multiple of `min_unit`,
    /// then each larger unit takes the floor of what remains. The last unit
    /// takes the rounded remainder.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownUnit`] if either unit is not a time unit
    /// - [`Error::InvalidRange`] if `max_unit` is smaller than `min_unit`
    /// - [`Error::InvalidUnit`] if `duration_ms` is not finite
    pub fn split(&self, duration_ms: f64, max_unit: &str, min_unit: &str) -> Result<UnitBreakdown> {
        let units = self.table.time_range(max_unit, min_unit)?;
        if !duration_ms.is_finite() {
            return Err(Error::InvalidUnit(duration_ms.to_string()));
        }

        let Some((last, larger)) = units.split_last() else {
            return Ok(UnitBreakdown::default());
        };
        let step = last.base_value;
        let mut input = round_half_up(duration_ms.abs() / step) * step;

        let mut entries = Vec::with_capacity(units.len());
        for unit in larger {
            let magnitude = (input / unit.base_value).floor();
            input -= magnitude * unit.base_value;
            entries.push(BreakdownEntry {
                unit: unit.name.clone(),
                magnitude: magnitude as u64,
            });
        }
        entries.push(BreakdownEntry {
            unit: last.name.clone(),
            magnitude: round_half_up(input / step) as u64,
        });

        Ok(UnitBreakdown { entries })
    }
}
