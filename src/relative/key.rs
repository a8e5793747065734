use serde::{Deserialize, Serialize};
use strum::Display;

use super::{RelativeUnit, UnitChoice, best_fit, compute_units};
use crate::units::Style;
use crate::{Error, Result};

/// Whether the target lies before or after the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tense {
    Ago,
    Until,
}

/// Options for relative time selection.
///
/// `min_unit` and `max_unit` only bound automatic selection; an explicit
/// unit is used as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativeOptions {
    pub unit: UnitChoice,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_unit: Option<RelativeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unit: Option<RelativeUnit>,
}

/// JSON shape of [`RelativeOptions`] before the names are checked.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawRelativeOptions {
    unit: Option<String>,
    style: Option<String>,
    min_unit: Option<String>,
    max_unit: Option<String>,
}

impl RelativeOptions {
    /// Reads options from JSON such as `{"unit": "bestFit", "style": "short"}`.
    ///
    /// Unlike going through serde directly, bad names come back as the
    /// matching error variant.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownUnit`] for an unknown `unit`, `minUnit` or `maxUnit`
    /// - [`Error::InvalidStyle`] for an unknown `style`
    /// - [`Error::InvalidRange`] if `maxUnit` is smaller than `minUnit`
    /// - [`Error::Json`] if the input is not a JSON object of strings
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRelativeOptions = serde_json::from_str(json)?;
        let options = Self {
            unit: parse_or_default(raw.unit.as_deref())?,
            style: parse_or_default(raw.style.as_deref())?,
            min_unit: raw.min_unit.as_deref().map(str::parse::<RelativeUnit>).transpose()?,
            max_unit: raw.max_unit.as_deref().map(str::parse::<RelativeUnit>).transpose()?,
        };
        options.validate()?;
        Ok(options)
    }

    /// Fails with [`Error::InvalidRange`] if `max_unit` is smaller than `min_unit`.
    pub fn validate(&self) -> Result<()> {
        match (self.max_unit, self.min_unit) {
            (Some(max), Some(min)) if max < min => Err(Error::invalid_range(max, min)),
            _ => Ok(()),
        }
    }

    fn clamp(&self, unit: RelativeUnit) -> RelativeUnit {
        let unit = self.min_unit.map_or(unit, |min| unit.max(min));
        self.max_unit.map_or(unit, |max| unit.min(max))
    }
}

fn parse_or_default<T>(raw: Option<&str>) -> Result<T>
where
    T: std::str::FromStr<Err = Error> + Default,
{
    raw.map(str::parse).transpose().map(Option::unwrap_or_default)
}

/// A message key and the magnitude to substitute into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeSelection {
    pub message_key: String,
    pub unit: RelativeUnit,
    pub tense: Tense,
    pub magnitude: u64,
}

impl RelativeSelection {
    fn new(unit: RelativeUnit, tense: Tense, style: Style, magnitude: u64) -> Self {
        Self {
            message_key: format!("{unit}s-{tense}-{style}"),
            unit,
            tense,
            magnitude,
        }
    }
}

/// Selects the message key for `target_ms` relative to `now_ms`.
///
/// The magnitude is the cascaded count for the chosen unit. The tense follows
/// its sign; a count that rounds to zero takes the tense of the raw offset.
///
/// ```rust
/// use unitfmt::relative::{RelativeOptions, resolve};
///
/// let now = 1_700_000_000_000.0;
/// let selection = resolve(now - 5.0 * 60_000.0, &RelativeOptions::default(), now).unwrap();
/// assert_eq!(selection.message_key, "minutes-ago-long");
/// assert_eq!(selection.magnitude, 5);
/// ```
///
/// # Errors
///
/// - [`Error::InvalidUnit`] if the offset is not finite
/// - [`Error::InvalidRange`] if the options bound a reversed unit range
pub fn resolve(
    target_ms: f64,
    options: &RelativeOptions,
    now_ms: f64,
) -> Result<RelativeSelection> {
    options.validate()?;
    let diff = target_ms - now_ms;
    if !diff.is_finite() {
        return Err(Error::InvalidUnit(diff.to_string()));
    }

    let units = compute_units(diff);
    let unit = match options.unit {
        UnitChoice::BestFit => options.clamp(best_fit(&units)),
        UnitChoice::Unit(unit) => unit,
    };
    let value = units.get(unit);
    let tense = if value < 0 || (value == 0 && diff < 0.0) {
        Tense::Ago
    } else {
        Tense::Until
    };
    Ok(RelativeSelection::new(unit, tense, options.style, value.unsigned_abs()))
}
