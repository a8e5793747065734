//! Integration tests for duration formatting.
//!
//! These tests run the split, trim and substitution steps together against
//! a catalog and against a recording resolver.

mod common;

use common::{RecordingResolver, english};
use unitfmt::Error;
use unitfmt::duration::DurationSpec;
use unitfmt::format::{DurationFormat, DurationOptions, PlainNumberFormat, format_duration};
use unitfmt::units::UnitTable;

#[test_log::test(tokio::test)]
async fn test_default_options_show_hours_to_seconds() {
    let text = format_duration(&english(), 45_296_000.0, DurationOptions::default())
        .await
        .unwrap();
    assert_eq!(text, "12:34:56");
}

#[test_log::test(tokio::test)]
async fn test_options_from_json() {
    let options: DurationOptions =
        serde_json::from_str(r#"{"maxUnit": "minute", "minUnit": "millisecond"}"#).unwrap();
    let text = format_duration(&english(), 83_456.0, options).await.unwrap();
    assert_eq!(text, "01:23.46");
}

#[test_log::test(tokio::test)]
async fn test_negative_duration_gets_literal_minus() {
    let text = format_duration(&english(), -90_000.0, DurationSpec::new("minute", "second"))
        .await
        .unwrap();
    assert_eq!(text, "-01:30");
}

#[test_log::test(tokio::test)]
async fn test_pattern_separators_are_preserved() {
    let resolver = RecordingResolver::with_pattern("hh h mm min ss s");
    let fmt = DurationFormat::new(vec!["fr".into()], DurationSpec::new("hour", "minute")).unwrap();
    assert_eq!(fmt.format(&resolver, 5_400_000.0).await.unwrap(), "01 h 30");
    assert_eq!(resolver.keys(), ["durationPattern"]);
}

#[test_log::test(tokio::test)]
async fn test_pattern_missing_token() {
    let resolver = RecordingResolver::with_pattern("mm:ss");
    let err = format_duration(&resolver, 1_000.0, DurationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownUnit(t) if t == "hh"));
}

#[test_log::test(tokio::test)]
async fn test_custom_number_formatter() {
    let fmt = DurationFormat::new(vec![], DurationSpec::new("minute", "second"))
        .unwrap()
        .number_formatter(PlainNumberFormat {
            minimum_integer_digits: 3,
            maximum_fraction_digits: 0,
        });
    assert_eq!(fmt.format(&english(), 61_000.0).await.unwrap(), "001:001");
}

#[test_log::test(tokio::test)]
async fn test_custom_table() {
    let table = UnitTable::from_json(
        r#"{
            "time": [
                {"name": "day", "baseValue": 86400000, "token": "DD"},
                {"name": "hour", "baseValue": 3600000, "token": "hh"}
            ],
            "groups": []
        }"#,
    )
    .unwrap();
    let resolver = RecordingResolver::with_pattern("DD:hh");
    let fmt = DurationFormat::with_table(&table, vec![], DurationSpec::new("day", "hour")).unwrap();
    assert_eq!(fmt.format(&resolver, 90_000_000.0).await.unwrap(), "01:01");
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        DurationFormat::new(vec![], DurationSpec::new("millisecond", "second")),
        Err(Error::InvalidRange { .. })
    ));
    assert!(matches!(
        DurationFormat::new(vec![], DurationSpec::new("hour", "microsecond")),
        Err(Error::UnknownUnit(u)) if u == "microsecond"
    ));
}
