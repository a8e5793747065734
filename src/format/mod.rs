//! Formatting façades.
//!
//! Each façade runs the pure computation for its kind of value, then hands the
//! resulting message key and arguments to a [`MessageResolver`] for the
//! localized text:
//!
//! - [`DurationFormat`] fills the `durationPattern` message with split fields
//! - [`RelativeTimeFormat`] resolves keys like `minutes-ago-long`
//! - [`UnitFormat`] resolves keys like `kilobyte-short`
//!
//! # Example
//!
//! ```rust
//! use unitfmt::format::{Catalog, format_unit};
//! use unitfmt::format::UnitOptions;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let catalog = Catalog::new().with_message("kilobyte-short", "{{ value }} KB")?;
//! let text = format_unit(&catalog, 1536.0, UnitOptions::new("byte")).await?;
//! assert_eq!(text, "1.5 KB");
//! # Ok::<(), unitfmt::Error>(())
//! # }).unwrap();
//! ```

mod duration;
mod number;
mod relative;
mod resolver;
mod unit;

pub use duration::{
    DURATION_PATTERN_KEY, DurationFormat, DurationOptions, ResolvedDurationOptions,
};
pub use number::{NumberFormatter, PlainNumberFormat};
pub use relative::{
    INCORRECT_DATE_KEY, RelativeTimeFormat, ResolvedRelativeTimeOptions, now_ms,
};
pub use resolver::{Catalog, MessageArgs, MessageResolver};
pub use unit::{ResolvedUnitOptions, UnitFormat, UnitOptions};

use crate::Result;
use crate::relative::RelativeOptions;

/// Formats a duration with the built-in unit table.
pub async fn format_duration<R>(
    resolver: &R,
    duration_ms: f64,
    options: DurationOptions,
) -> Result<String>
where
    R: MessageResolver + ?Sized,
{
    DurationFormat::new(Vec::new(), options)?
        .format(resolver, duration_ms)
        .await
}

/// Formats `target_ms` relative to `now_ms`.
pub async fn format_relative<R>(
    resolver: &R,
    target_ms: f64,
    now_ms: f64,
    options: RelativeOptions,
) -> Result<String>
where
    R: MessageResolver + ?Sized,
{
    RelativeTimeFormat::new(Vec::new(), options)?
        .format(resolver, target_ms, now_ms)
        .await
}

/// Formats a magnitude in the best-sized unit of its group.
pub async fn format_unit<R>(resolver: &R, value: f64, options: UnitOptions) -> Result<String>
where
    R: MessageResolver + ?Sized,
{
    UnitFormat::new(Vec::new(), options)?
        .format(resolver, value)
        .await
}
