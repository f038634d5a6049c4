/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Folds a non-negative parameter into `[0, period]`.
///
/// Equivalent to `while x > period { x -= period }` but runs in constant
/// time. Exact multiples of the period above it land on `period`, not `0`.
/// Non-finite input yields `NaN`.
#[must_use]
pub fn fold(x: f64, period: f64) -> f64 {
    if x <= period {
        return x;
    }
    let r = x % period;
    if r == 0.0 {
        period
    } else {
        r
    }
}

/// Returns `value` if it is finite, otherwise an error naming the parameter.
///
/// # Errors
///
/// Returns [`GeometryError::NonFiniteParameter`](crate::error::GeometryError::NonFiniteParameter)
/// for `NaN` and infinities.
pub fn ensure_finite(parameter: &'static str, value: f64) -> crate::error::Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(crate::error::GeometryError::NonFiniteParameter { parameter, value }.into())
    }
}
