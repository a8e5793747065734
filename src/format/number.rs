//! Number rendering for message arguments.

use serde::{Deserialize, Serialize};

use crate::rounding::round_half_up;

/// Renders a number for substitution into a message.
///
/// Implement this to plug in a locale-aware number formatter.
pub trait NumberFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// ASCII digits without grouping separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainNumberFormat {
    /// Integer part is zero-padded to at least this many digits.
    pub minimum_integer_digits: usize,
    pub maximum_fraction_digits: usize,
}

impl PlainNumberFormat {
    /// Two-digit fields for duration patterns (`05`, `12`).
    pub const DURATION_FIELD: Self = Self {
        minimum_integer_digits: 2,
        maximum_fraction_digits: 0,
    };
}

impl Default for PlainNumberFormat {
    fn default() -> Self {
        Self {
            minimum_integer_digits: 1,
            maximum_fraction_digits: 2,
        }
    }
}

impl NumberFormatter for PlainNumberFormat {
    fn format(&self, value: f64) -> String {
        let digits = self.maximum_fraction_digits.min(15);
        let factor = 10f64.powi(digits as i32);
        let rounded = round_half_up(value.abs() * factor) / factor;

        let text = format!("{rounded:.digits$}");
        let (int, frac) = match text.split_once('.') {
            Some((int, frac)) => (int, frac.trim_end_matches('0')),
            None => (text.as_str(), ""),
        };

        let mut out = String::new();
        if value < 0.0 && rounded != 0.0 {
            out.push('-');
        }
        out.push_str(&format!("{int:0>width$}", width = self.minimum_integer_digits));
        if !frac.is_empty() {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}
