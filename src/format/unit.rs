use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::number::{NumberFormatter, PlainNumberFormat};
use super::resolver::{MessageArgs, MessageResolver};
use crate::logging::{debug, trace};
use crate::scale::{ScaleChoice, parse_magnitude, select_scale};
use crate::units::{Style, Unit, UnitGroup, UnitTable};
use crate::{Error, Result};

/// Options for [`UnitFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitOptions {
    /// Unit the formatted values are given in, e.g. `byte` or `second`.
    pub unit: String,
    /// Defaults to the first style the unit's group allows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl UnitOptions {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            style: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Reads options from JSON such as `{"unit": "byte", "style": "short"}`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidStyle`] for an unknown `style`
    /// - [`Error::Json`] if `unit` is missing or a field is not a string
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawUnitOptions = serde_json::from_str(json)?;
        Ok(Self {
            unit: raw.unit,
            style: raw.style.as_deref().map(str::parse::<Style>).transpose()?,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawUnitOptions {
    unit: String,
    #[serde(default)]
    style: Option<String>,
}

/// Effective settings of a [`UnitFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedUnitOptions {
    pub locales: Vec<String>,
    pub unit: String,
    pub group: String,
    pub style: Style,
}

/// Formats a magnitude in the best-sized unit of its group ("1.5 KB").
pub struct UnitFormat<'t> {
    locales: Vec<String>,
    group: &'t UnitGroup,
    unit: &'t Unit,
    style: Style,
    numbers: Arc<dyn NumberFormatter>,
}

impl UnitFormat<'static> {
    pub fn new(locales: Vec<String>, options: UnitOptions) -> Result<Self> {
        Self::with_table(UnitTable::standard(), locales, options)
    }
}

impl<'t> UnitFormat<'t> {
    /// Creates a formatter over a custom unit table.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownUnit`] if no group of `table` contains `options.unit`
    /// - [`Error::InvalidStyle`] if the group doesn't allow `options.style`
    pub fn with_table(
        table: &'t UnitTable,
        locales: Vec<String>,
        options: UnitOptions,
    ) -> Result<Self> {
        let group = table.group_for_unit(&options.unit)?;
        let unit = group.unit(&options.unit)?;
        let style = options.style.unwrap_or_else(|| group.default_style());
        group.check_style(style)?;
        debug!(
            "unit format {} ({}) style={} for {:?}",
            unit.name, group.name, style, locales
        );
        Ok(Self {
            locales,
            group,
            unit,
            style,
            numbers: Arc::new(PlainNumberFormat::default()),
        })
    }

    /// Replaces the formatter used for the `value` argument.
    pub fn number_formatter(mut self, numbers: impl NumberFormatter + 'static) -> Self {
        self.numbers = Arc::new(numbers);
        self
    }

    pub fn resolved_options(&self) -> ResolvedUnitOptions {
        ResolvedUnitOptions {
            locales: self.locales.clone(),
            unit: self.unit.name.clone(),
            group: self.group.name.clone(),
            style: self.style,
        }
    }

    /// Picks the display scale for `value`, given in the configured unit.
    pub fn select(&self, value: f64) -> Result<ScaleChoice> {
        if !value.is_finite() {
            return Err(Error::InvalidUnit(value.to_string()));
        }
        select_scale(self.group, value * self.unit.base_value)
    }

    /// Message key for a scale choice, e.g. `kilobyte-short`.
    pub fn message_key(&self, choice: &ScaleChoice) -> String {
        format!("{}-{}", choice.unit_name, self.style)
    }

    pub async fn format<R>(&self, resolver: &R, value: f64) -> Result<String>
    where
        R: MessageResolver + ?Sized,
    {
        let choice = self.select(value)?;
        let key = self.message_key(&choice);
        trace!("resolving {key} with value {}", choice.scaled_value);

        let mut args = MessageArgs::new();
        args.insert(
            "value".into(),
            Value::String(self.numbers.format(choice.scaled_value)),
        );
        resolver.resolve(&key, &args).await
    }

    /// Like [`UnitFormat::format`], for a value that still needs parsing.
    ///
    /// Fails with [`Error::InvalidUnit`] unless `raw` is a finite number.
    pub async fn format_str<R>(&self, resolver: &R, raw: &str) -> Result<String>
    where
        R: MessageResolver + ?Sized,
    {
        let value = parse_magnitude(raw)?;
        self.format(resolver, value).await
    }
}
