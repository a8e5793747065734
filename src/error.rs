//! Error types for the unitfmt library.
//!
//! This module provides the [`Error`] enum and [`Result`] type alias used
//! throughout the library for error handling.

use thiserror::Error;

/// Error type for unitfmt operations.
///
/// Misuse of the computational core (unknown units, reversed ranges, bad styles,
/// non-numeric magnitudes) is reported synchronously at the call site. The
/// remaining variants come from the message resolver and number formatting seams.
#[derive(Error, Debug)]
pub enum Error {
    /// A unit name or pattern token is not present in the relevant table.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// The max unit comes after the min unit in unit order.
    #[error("invalid unit range: {max} must not be smaller than {min}")]
    InvalidRange { max: String, min: String },

    /// The style is not a known style, or not one the unit group allows.
    ///
    /// `group` is `None` when the style name itself could not be parsed.
    #[error("invalid style {style:?}{}", render_group(.group))]
    InvalidStyle {
        style: String,
        group: Option<String>,
    },

    /// A magnitude could not be interpreted as a finite number.
    #[error("invalid magnitude: {0}")]
    InvalidUnit(String),

    /// The message resolver has no template for the key.
    #[error("no message for key {0:?}")]
    MissingMessage(String),

    /// A template rendering error occurred.
    ///
    /// This happens when a catalog template has invalid syntax or references
    /// an argument that was not supplied.
    #[error(transparent)]
    Tera(#[from] tera::Error),

    /// Options or a unit table could not be deserialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for unitfmt operations.
///
/// This is defined as `std::result::Result<T, unitfmt::Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;

fn render_group(group: &Option<String>) -> String {
    match group {
        Some(group) => format!(" for unit group {group:?}"),
        None => String::new(),
    }
}

impl Error {
    pub(crate) fn invalid_range(max: impl ToString, min: impl ToString) -> Self {
        Error::InvalidRange {
            max: max.to_string(),
            min: min.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::UnknownUnit("fortnight".into()).to_string(),
            "unknown unit: fortnight"
        );
        assert_eq!(
            Error::invalid_range("second", "hour").to_string(),
            "invalid unit range: second must not be smaller than hour"
        );
        assert_eq!(
            Error::InvalidStyle {
                style: "long".into(),
                group: Some("digital".into())
            }
            .to_string(),
            "invalid style \"long\" for unit group \"digital\""
        );
        assert_eq!(
            Error::InvalidStyle {
                style: "tiny".into(),
                group: None
            }
            .to_string(),
            "invalid style \"tiny\""
        );
    }
}
