//! Goal completion percentage.

/// Completion percentage of a goal, clamped to `[0, 100]`.
///
/// Goals are user-entered, so a zero or negative target is a plausible
/// data-entry mistake; it yields `0.0` instead of a NaN/Infinity that would
/// poison a dashboard. A negative current value clamps to `0.0`, an
/// overshoot clamps to `100.0`.
pub fn progress_percent(current_value: f64, target_value: f64) -> f64 {
    if !target_value.is_finite() || target_value <= 0.0 || !current_value.is_finite() {
        return 0.0;
    }
    (current_value / target_value * 100.0).clamp(0.0, 100.0)
}
