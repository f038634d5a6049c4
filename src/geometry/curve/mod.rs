mod any;
mod circle;
mod ellipse;
mod helix;

pub use any::AnyCurve;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies inside the domain (bounds included).
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// Discriminator for the concrete curve variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Circle => "circle",
            CurveKind::Ellipse => "ellipse",
            CurveKind::Helix => "helix",
        };
        f.write_str(name)
    }
}

/// Trait for parametric curves centered at the origin.
///
/// Every curve maps a real parameter `t` to a point in 3D space. Before
/// evaluation the parameter goes through [`Curve::normalize`], so `point`
/// and `derivative` always agree on where `t` lands.
pub trait Curve {
    /// Maps `t` into the curve's domain.
    fn normalize(&self, t: f64) -> f64;

    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn point(&self, t: f64) -> Point3;

    /// Computes the first derivative `(dx/dt, dy/dt, dz/dt)` at parameter `t`.
    ///
    /// Uses the closed-form parametric derivative, which is defined for every
    /// finite `t`.
    fn derivative(&self, t: f64) -> Vector3;

    /// Computes the slope form of the derivative obtained by differentiating
    /// the implicit curve equation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UndefinedDerivative`] where the point sits on
    /// a coordinate axis and the slope divides by zero.
    fn implicit_derivative(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Evaluates point and derivative together for display.
    fn sample(&self, t: f64) -> CurveSample {
        CurveSample {
            point: self.point(t),
            derivative: self.derivative(t),
        }
    }
}

/// A point and first derivative evaluated at one parameter value.
///
/// Displays as two tab-separated lines with two decimal places per value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Position on the curve.
    pub point: Point3,
    /// First derivative at that position.
    pub derivative: Vector3,
}

impl fmt::Display for CurveSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.point;
        let d = &self.derivative;
        writeln!(f, "Point:\t{:.2} {:.2} {:.2}", p.x, p.y, p.z)?;
        write!(f, "1st deriv:\t{:.2} {:.2} {:.2}", d.x, d.y, d.z)
    }
}

/// Slope of the implicit curve `x^2/a^2 + y^2/b^2 = 1` at `point`.
///
/// Returns `(-y*a^2 / (x*b^2), -x*b^2 / (y*a^2))` for the semi-axes `a` and
/// `b`. Circles pass their radius for both. A coordinate counts as zero when
/// it is within `TOLERANCE` of zero relative to its semi-axis, so a
/// degenerate axis of length zero is always singular.
fn implicit_slope(t: f64, point: &Point3, a: f64, b: f64) -> Result<(f64, f64)> {
    let (x, y) = (point.x, point.y);
    if x.abs() <= TOLERANCE * a || y.abs() <= TOLERANCE * b {
        tracing::warn!(t, x, y, "implicit derivative undefined on a coordinate axis");
        return Err(GeometryError::UndefinedDerivative { t }.into());
    }
    let (a2, b2) = (a * a, b * b);
    Ok(((-y * a2) / (x * b2), (-x * b2) / (y * a2)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn sample_display_format() {
        let s = CurveSample {
            point: Point3::new(1.414_2, 1.414_2, 0.0),
            derivative: Vector3::new(-1.0, -1.0, 3.0),
        };
        assert_eq!(
            s.to_string(),
            "Point:\t1.41 1.41 0.00\n1st deriv:\t-1.00 -1.00 3.00"
        );
    }

    #[test]
    fn domain_contains_bounds() {
        let d = CurveDomain::new(0.0, 1.0);
        assert!(d.contains(0.0));
        assert!(d.contains(1.0));
        assert!(!d.contains(1.5));
    }

    #[test]
    fn implicit_slope_rejects_axis_points() {
        let on_axis = Point3::new(2.0, 0.0, 0.0);
        let err = implicit_slope(0.0, &on_axis, 1.0, 1.0).unwrap_err();
        assert!(matches!(
            err,
            crate::CurvesError::Geometry(GeometryError::UndefinedDerivative { .. })
        ));
    }

    #[test]
    fn implicit_slope_off_axis() {
        let p = Point3::new(1.0, 2.0, 0.0);
        let (dx, dy) = implicit_slope(0.3, &p, 2.0, 3.0).unwrap();
        assert!((dx - (-2.0 * 4.0) / 9.0).abs() < 1e-12);
        assert!((dy - (-9.0) / (2.0 * 4.0)).abs() < 1e-12);
    }

    #[test]
    fn implicit_slope_tolerance_scales_with_axes() {
        // 1e-9 off the axis is noise on a unit curve but not on a tiny one.
        let p = Point3::new(1e-9, 1e-9, 0.0);
        assert!(implicit_slope(0.0, &p, 1.0, 1.0).is_err());
        assert!(implicit_slope(0.0, &p, 1e-6, 1e-6).is_ok());
    }

    #[test]
    fn implicit_slope_degenerate_axis() {
        let origin = Point3::origin();
        assert!(implicit_slope(0.0, &origin, 0.0, 1.0).is_err());
    }

    #[test]
    fn kind_display() {
        assert_eq!(CurveKind::Helix.to_string(), "helix");
    }
}
