use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::Value;

use super::number::{NumberFormatter, PlainNumberFormat};
use super::resolver::{MessageArgs, MessageResolver};
use crate::logging::{debug, trace};
use crate::relative::{self, RelativeOptions, RelativeSelection};
use crate::Result;

/// Message key used when the target time is not a number.
pub const INCORRECT_DATE_KEY: &str = "incorrectDate";

/// Effective settings of a [`RelativeTimeFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRelativeTimeOptions {
    pub locales: Vec<String>,
    #[serde(flatten)]
    pub options: RelativeOptions,
}

/// Formats a point in time relative to now ("3 days ago").
pub struct RelativeTimeFormat {
    locales: Vec<String>,
    options: RelativeOptions,
    numbers: Arc<dyn NumberFormatter>,
}

impl RelativeTimeFormat {
    /// # Errors
    ///
    /// [`crate::Error::InvalidRange`] if `max_unit` is smaller than `min_unit`.
    pub fn new(locales: Vec<String>, options: RelativeOptions) -> Result<Self> {
        options.validate()?;
        debug!(
            "relative time format unit={} style={} for {:?}",
            options.unit, options.style, locales
        );
        Ok(Self {
            locales,
            options,
            numbers: Arc::new(PlainNumberFormat::default()),
        })
    }

    /// Replaces the formatter used for the `value` argument.
    pub fn number_formatter(mut self, numbers: impl NumberFormatter + 'static) -> Self {
        self.numbers = Arc::new(numbers);
        self
    }

    pub fn resolved_options(&self) -> ResolvedRelativeTimeOptions {
        ResolvedRelativeTimeOptions {
            locales: self.locales.clone(),
            options: self.options,
        }
    }

    /// Picks the message key for `target_ms` relative to `now_ms`.
    ///
    /// Returns `None` when `target_ms` is NaN.
    pub fn select(&self, target_ms: f64, now_ms: f64) -> Result<Option<RelativeSelection>> {
        if target_ms.is_nan() {
            return Ok(None);
        }
        relative::resolve(target_ms, &self.options, now_ms).map(Some)
    }

    /// Formats `target_ms` relative to `now_ms`.
    ///
    /// A NaN target resolves [`INCORRECT_DATE_KEY`] instead of failing.
    pub async fn format<R>(&self, resolver: &R, target_ms: f64, now_ms: f64) -> Result<String>
    where
        R: MessageResolver + ?Sized,
    {
        let Some(selection) = self.select(target_ms, now_ms)? else {
            debug!("target time is not a number");
            return resolver
                .resolve(INCORRECT_DATE_KEY, &MessageArgs::new())
                .await;
        };

        trace!(
            "resolving {} with magnitude {}",
            selection.message_key, selection.magnitude
        );
        let mut args = MessageArgs::new();
        args.insert(
            "value".into(),
            Value::String(self.numbers.format(selection.magnitude as f64)),
        );
        resolver.resolve(&selection.message_key, &args).await
    }

    /// Formats `target_ms` relative to the system clock.
    pub async fn format_from_now<R>(&self, resolver: &R, target_ms: f64) -> Result<String>
    where
        R: MessageResolver + ?Sized,
    {
        self.format(resolver, target_ms, now_ms()).await
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::format::Catalog;
    use crate::relative::{RelativeUnit, UnitChoice};
    use crate::units::Style;

    const NOW: f64 = 1_600_000_000_000.0;
    const DAY: f64 = 86_400_000.0;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_message("minutes-ago-long", "{{ value }} minutes ago")
            .unwrap()
            .with_message("days-until-long", "in {{ value }} days")
            .unwrap()
            .with_message("weeks-ago-short", "{{ value }} wk. ago")
            .unwrap()
            .with_message(INCORRECT_DATE_KEY, "Incorrect date")
            .unwrap()
    }

    #[tokio::test]
    async fn test_format_best_fit() {
        let fmt = RelativeTimeFormat::new(vec!["en-US".into()], Default::default()).unwrap();
        assert_eq!(
            fmt.format(&catalog(), NOW - 5.0 * 60_000.0, NOW).await.unwrap(),
            "5 minutes ago"
        );
        assert_eq!(fmt.format(&catalog(), NOW + 2.0 * DAY, NOW).await.unwrap(), "in 2 days");
    }

    #[tokio::test]
    async fn test_format_explicit_unit_and_style() {
        let options = RelativeOptions {
            unit: UnitChoice::Unit(RelativeUnit::Week),
            style: Style::Short,
            ..Default::default()
        };
        let fmt = RelativeTimeFormat::new(vec![], options).unwrap();
        assert_eq!(
            fmt.format(&catalog(), NOW - 14.0 * DAY, NOW).await.unwrap(),
            "2 wk. ago"
        );
    }

    #[tokio::test]
    async fn test_format_nan_is_incorrect_date() {
        let fmt = RelativeTimeFormat::new(vec![], Default::default()).unwrap();
        assert_eq!(fmt.select(f64::NAN, NOW).unwrap(), None);
        assert_eq!(
            fmt.format(&catalog(), f64::NAN, NOW).await.unwrap(),
            "Incorrect date"
        );
    }

    #[tokio::test]
    async fn test_format_missing_message() {
        let fmt = RelativeTimeFormat::new(vec![], Default::default()).unwrap();
        let err = fmt.format(&catalog(), NOW + 3.0 * 3_600_000.0, NOW).await.unwrap_err();
        assert!(matches!(err, Error::MissingMessage(k) if k == "hours-until-long"));
    }

    #[test]
    fn test_new_rejects_reversed_range() {
        let options = RelativeOptions {
            min_unit: Some(RelativeUnit::Month),
            max_unit: Some(RelativeUnit::Minute),
            ..Default::default()
        };
        assert!(matches!(
            RelativeTimeFormat::new(vec![], options),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_resolved_options_serialize() {
        let options = RelativeOptions::from_json(r#"{"style": "narrow", "minUnit": "hour"}"#).unwrap();
        let fmt = RelativeTimeFormat::new(vec!["de".into()], options).unwrap();
        let json = serde_json::to_value(fmt.resolved_options()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "locales": ["de"],
                "unit": "bestFit",
                "style": "narrow",
                "minUnit": "hour"
            })
        );
    }

    #[test]
    fn test_now_ms_is_recent() {
        assert!(now_ms() > NOW);
    }
}
