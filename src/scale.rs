//! Scale selection for unit groups (bytes to terabytes, seconds to months).

use serde::Serialize;

use crate::rounding::round_hundredths;
use crate::units::UnitGroup;
use crate::{Error, Result};

/// The unit picked for a magnitude and the magnitude expressed in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleChoice {
    pub unit_name: String,
    /// Rounded to two decimal digits.
    pub scaled_value: f64,
}

/// Picks the display unit for `magnitude`, given in the group's base unit.
///
/// A magnitude moves up to the next unit once it reaches that unit's size
/// times the group's rounding factor, so with a factor of 0.8 anything from
/// 819.2 bytes shows as kilobytes.
///
/// ```rust
/// use unitfmt::scale::select_scale;
/// use unitfmt::units::UnitTable;
///
/// let digital = UnitTable::standard().group("digital").unwrap();
/// let choice = select_scale(digital, 1536.0).unwrap();
/// assert_eq!(choice.unit_name, "kilobyte");
/// assert_eq!(choice.scaled_value, 1.5);
/// ```
///
/// # Errors
///
/// - [`Error::InvalidUnit`] if `magnitude` is not finite
/// - [`Error::UnknownUnit`] if the group has no units
pub fn select_scale(group: &UnitGroup, magnitude: f64) -> Result<ScaleChoice> {
    if !magnitude.is_finite() {
        return Err(Error::InvalidUnit(magnitude.to_string()));
    }
    let last = group
        .units
        .len()
        .checked_sub(1)
        .ok_or_else(|| Error::UnknownUnit(group.name.clone()))?;

    let scale = (1..group.units.len())
        .find(|&i| magnitude < group.units[i].base_value * group.rounding_factor)
        .map_or(last, |i| i - 1);
    let unit = &group.units[scale];

    Ok(ScaleChoice {
        unit_name: unit.name.clone(),
        scaled_value: round_hundredths(magnitude / unit.base_value),
    })
}

/// Parses a textual magnitude for [`select_scale`].
///
/// Fails with [`Error::InvalidUnit`] unless `raw` is a finite number.
pub fn parse_magnitude(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::InvalidUnit(raw.to_string()))
}
