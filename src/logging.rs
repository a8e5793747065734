//! Logging hooks.
//!
//! Messages go through the `log` facade with the `unitfmt` target when the
//! `log` feature is enabled. Without it the macros only type-check their
//! arguments and emit nothing.

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::debug!(target: "unitfmt", $($arg)+);
        #[cfg(not(feature = "log"))]
        {
            let _ = ::std::format_args!($($arg)+);
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::trace!(target: "unitfmt", $($arg)+);
        #[cfg(not(feature = "log"))]
        {
            let _ = ::std::format_args!($($arg)+);
        }
    }};
}

pub(crate) use debug;
pub(crate) use trace;
