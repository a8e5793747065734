//! Integration tests for scaled unit formatting.

mod common;

use common::{RecordingResolver, english};
use unitfmt::Error;
use unitfmt::format::{UnitFormat, UnitOptions, format_unit};
use unitfmt::units::{Style, UnitTable};

const KB: f64 = 1024.0;

#[test_log::test(tokio::test)]
async fn test_digital_sizes() {
    let fmt = UnitFormat::new(vec!["en".into()], UnitOptions::new("byte")).unwrap();
    let catalog = english();
    assert_eq!(fmt.format(&catalog, 12.0).await.unwrap(), "12 B");
    assert_eq!(fmt.format(&catalog, 1536.0).await.unwrap(), "1.5 KB");
    assert_eq!(fmt.format(&catalog, 900.0 * KB).await.unwrap(), "0.88 MB");
    assert_eq!(fmt.format(&catalog, 2.25 * KB * KB * KB).await.unwrap(), "2.25 GB");
    assert_eq!(fmt.format(&catalog, 4096.0 * KB * KB * KB * KB).await.unwrap(), "4096 TB");
}

#[test_log::test(tokio::test)]
async fn test_duration_group_keys() {
    let resolver = RecordingResolver::default();
    let text = format_unit(&resolver, 3.0 * 86_400.0, UnitOptions::new("second"))
        .await
        .unwrap();
    assert_eq!(text, "day-narrow(3)");
}

#[test_log::test(tokio::test)]
async fn test_string_magnitudes() {
    let fmt = UnitFormat::new(vec![], UnitOptions::new("megabyte")).unwrap();
    assert_eq!(fmt.format_str(&english(), "0.5").await.unwrap(), "512 KB");
    assert!(matches!(
        fmt.format_str(&english(), "half").await,
        Err(Error::InvalidUnit(_))
    ));
}

#[test_log::test(tokio::test)]
async fn test_custom_group() {
    let table = UnitTable::from_json(
        r#"{
            "time": [],
            "groups": [{
                "name": "length",
                "units": [{"name": "meter", "baseValue": 1}, {"name": "kilometer", "baseValue": 1000}],
                "styles": ["long", "short"],
                "roundingFactor": 0.5
            }]
        }"#,
    )
    .unwrap();
    let resolver = RecordingResolver::default();
    let fmt = UnitFormat::with_table(&table, vec![], UnitOptions::new("meter").style(Style::Short)).unwrap();
    assert_eq!(fmt.format(&resolver, 499.0).await.unwrap(), "meter-short(499)");
    assert_eq!(fmt.format(&resolver, 500.0).await.unwrap(), "kilometer-short(0.5)");
}

#[test]
fn test_options_errors() {
    let options = UnitOptions::from_json(r#"{"unit": "gigabyte", "style": "narrow"}"#).unwrap();
    assert!(matches!(
        UnitFormat::new(vec![], options),
        Err(Error::InvalidStyle { style, group })
            if style == "narrow" && group.as_deref() == Some("digital")
    ));
    assert!(matches!(
        UnitOptions::from_json(r#"{"unit": "gigabyte", "style": "tiny"}"#),
        Err(Error::InvalidStyle { style, group: None }) if style == "tiny"
    ));
    assert!(matches!(
        UnitFormat::new(vec![], UnitOptions::new("lightyear")),
        Err(Error::UnknownUnit(u)) if u == "lightyear"
    ));
    assert!(matches!(
        UnitOptions::from_json(r#"{"style": "short"}"#),
        Err(Error::Json(_))
    ));
    let err = serde_json::from_str::<UnitOptions>(r#"{"unit": "byte", "style": "tiny"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid style \"tiny\""));
}
