/// Rounds to the nearest integer, breaking ties toward positive infinity.
///
/// `f64::round` breaks ties away from zero, which disagrees for negative
/// halves (`-2.5` becomes `-3.0` there, `-2.0` here). Relative offsets are
/// signed, so every rounding step in the crate goes through this function.
pub(crate) fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Rounds to two decimal digits.
pub(crate) fn round_hundredths(x: f64) -> f64 {
    round_half_up(x * 100.0) / 100.0
}
