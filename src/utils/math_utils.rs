//! Numeric helpers for the optical formulas.
use num::Zero;

/// Divide two values and saturate the result into the finite `f64` range.
///
/// This is used for every reciprocal (curvature, optical power, refracted angle) so that the
/// mathematical poles of the formulas degrade to very large but finite numbers:
///   - `x / 0.0` with `x != 0.0` returns `f64::MAX` or `f64::MIN` depending on the signs.
///   - `x / inf` returns `0.0` (e.g. the power of a flat surface).
///   - indeterminate results (`0.0 / 0.0`, `inf / inf`) return `0.0`.
///
/// # Example
/// ```
/// use lensbench::utils::saturating_div;
///
/// assert_eq!(saturating_div(1.0, 4.0), 0.25);
/// assert_eq!(saturating_div(1.0, 0.0), f64::MAX);
/// assert_eq!(saturating_div(-1.0, 0.0), f64::MIN);
/// assert_eq!(saturating_div(0.5, f64::INFINITY), 0.0);
/// ```
#[must_use]
pub fn saturating_div(numerator: f64, denominator: f64) -> f64 {
    let quotient = numerator / denominator;
    if quotient.is_nan() {
        f64::zero()
    } else {
        quotient.clamp(f64::MIN, f64::MAX)
    }
}
