//! Locale-agnostic numeric decompositions for human-facing formatting.
//!
//! The crate computes *what* to show and leaves the wording to a message
//! resolver:
//!
//! - [`duration`] splits a millisecond duration into hours, minutes, seconds
//!   and hundredths, and trims a localized `hh:mm:ss.SS` pattern to match
//! - [`relative`] picks a unit and message key for a time offset
//! - [`scale`] picks the display unit for a byte count or coarse duration
//! - [`format`] ties these to a [`format::MessageResolver`]
//!
//! All computation is synchronous and free of shared mutable state. Only the
//! message lookup in [`format`] is async.

pub use error::{Error, Result};

pub mod duration;
mod error;
pub mod format;
mod logging;
pub mod relative;
mod rounding;
pub mod scale;
pub mod units;
