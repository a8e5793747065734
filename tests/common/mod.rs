//! Shared resolvers for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use unitfmt::format::{Catalog, MessageArgs, MessageResolver};

/// English messages covering every key the tests format.
pub fn english() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add_message("durationPattern", "hh:mm:ss.SS").unwrap();
    catalog.add_message("incorrectDate", "Incorrect date").unwrap();
    for unit in ["second", "minute", "hour", "day", "week", "month", "quarter", "year"] {
        for style in ["long", "short", "narrow"] {
            catalog
                .add_message(&format!("{unit}s-ago-{style}"), &format!("{{{{ value }}}} {unit}s ago"))
                .unwrap();
            catalog
                .add_message(&format!("{unit}s-until-{style}"), &format!("in {{{{ value }}}} {unit}s"))
                .unwrap();
        }
    }
    for (unit, abbr) in [("byte", "B"), ("kilobyte", "KB"), ("megabyte", "MB"), ("gigabyte", "GB"), ("terabyte", "TB")] {
        catalog
            .add_message(&format!("{unit}-short"), &format!("{{{{ value }}}} {abbr}"))
            .unwrap();
    }
    catalog
}

/// Records every lookup and echoes the key with its arguments.
#[derive(Default)]
pub struct RecordingResolver {
    pub calls: Mutex<Vec<(String, MessageArgs)>>,
    pub pattern: Option<String>,
}

impl RecordingResolver {
    pub fn with_pattern(pattern: &str) -> Self {
        Self {
            pattern: Some(pattern.to_string()),
            ..Default::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(k, _)| k.clone()).collect()
    }
}

#[async_trait]
impl MessageResolver for RecordingResolver {
    async fn resolve(&self, key: &str, args: &MessageArgs) -> unitfmt::Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((key.to_string(), args.clone()));
        if key == "durationPattern" {
            if let Some(pattern) = &self.pattern {
                return Ok(pattern.clone());
            }
        }
        let value = args.get("value").and_then(|v| v.as_str()).unwrap_or("");
        Ok(format!("{key}({value})"))
    }
}
