use std::sync::Arc;

use serde::Serialize;

use super::number::{NumberFormatter, PlainNumberFormat};
use super::resolver::{MessageArgs, MessageResolver};
use crate::duration::{DurationSpec, DurationSplitter, PatternTrimmer};
use crate::logging::{debug, trace};
use crate::units::UnitTable;
use crate::{Error, Result};

/// Message key of the full `hh:mm:ss.SS` style pattern.
pub const DURATION_PATTERN_KEY: &str = "durationPattern";

/// Options for [`DurationFormat`]. Defaults to hours through seconds.
pub type DurationOptions = DurationSpec;

/// Effective settings of a [`DurationFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDurationOptions {
    pub locales: Vec<String>,
    pub max_unit: String,
    pub min_unit: String,
}

/// Formats millisecond durations as clock-style strings (`01:02:03`).
pub struct DurationFormat<'t> {
    table: &'t UnitTable,
    locales: Vec<String>,
    options: DurationOptions,
    numbers: Arc<dyn NumberFormatter>,
}

impl DurationFormat<'static> {
    pub fn new(locales: Vec<String>, options: DurationOptions) -> Result<Self> {
        Self::with_table(UnitTable::standard(), locales, options)
    }
}

impl<'t> DurationFormat<'t> {
    /// Creates a formatter over a custom unit table.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownUnit`] if either unit is not a time unit of `table`
    /// - [`Error::InvalidRange`] if `max_unit` is smaller than `min_unit`
    pub fn with_table(
        table: &'t UnitTable,
        locales: Vec<String>,
        options: DurationOptions,
    ) -> Result<Self> {
        table.time_range(&options.max_unit, &options.min_unit)?;
        debug!(
            "duration format {}..{} for {:?}",
            options.max_unit, options.min_unit, locales
        );
        Ok(Self {
            table,
            locales,
            options,
            numbers: Arc::new(PlainNumberFormat::DURATION_FIELD),
        })
    }

    /// Replaces the formatter used for each field.
    pub fn number_formatter(mut self, numbers: impl NumberFormatter + 'static) -> Self {
        self.numbers = Arc::new(numbers);
        self
    }

    pub fn resolved_options(&self) -> ResolvedDurationOptions {
        ResolvedDurationOptions {
            locales: self.locales.clone(),
            max_unit: self.options.max_unit.clone(),
            min_unit: self.options.min_unit.clone(),
        }
    }

    /// Formats `duration_ms`, prefixing `-` when it is negative.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUnit`] if `duration_ms` is not finite
    /// - [`Error::UnknownUnit`] if the localized pattern lacks a needed token
    /// - any error from `resolver`
    pub async fn format<R>(&self, resolver: &R, duration_ms: f64) -> Result<String>
    where
        R: MessageResolver + ?Sized,
    {
        let DurationSpec { max_unit, min_unit } = &self.options;
        let breakdown = DurationSplitter::new(self.table).split(duration_ms, max_unit, min_unit)?;

        trace!("resolving {DURATION_PATTERN_KEY}");
        let pattern = resolver
            .resolve(DURATION_PATTERN_KEY, &MessageArgs::new())
            .await?;
        let trimmed = PatternTrimmer::new(self.table).locate(&pattern, max_unit, min_unit)?;
        let mut text = trimmed.fill(|unit| {
            let magnitude = breakdown
                .get(unit)
                .ok_or_else(|| Error::UnknownUnit(unit.to_string()))?;
            Ok(self.numbers.format(magnitude as f64))
        })?;

        if duration_ms < 0.0 {
            text.insert(0, '-');
        }
        Ok(text)
    }
}
