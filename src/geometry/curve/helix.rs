use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::{ensure_finite, Point3, Vector3};

use super::{implicit_slope, Curve, CurveDomain};

/// A circular helix around the Z axis, starting on the positive X axis.
///
/// `step` is the rise along Z per full revolution and keeps its sign, so a
/// negative step winds downward. Negative parameters are reflected but never
/// folded: the helix is not periodic in Z.
///
/// `P(t) = (r * cos(t), r * sin(t), step * t / (2*pi))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    /// Creates a new helix. A negative radius is stored as its magnitude.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or step is `NaN` or infinite.
    pub fn new(radius: f64, step: f64) -> Result<Self> {
        let radius = ensure_finite("radius", radius)?.abs();
        let step = ensure_finite("step", step)?;
        Ok(Self { radius, step })
    }

    /// Returns the radius of the helix.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the signed rise per revolution.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for Helix {
    fn default() -> Self {
        Self {
            radius: 1.0,
            step: 3.0,
        }
    }
}

impl Curve for Helix {
    fn normalize(&self, t: f64) -> f64 {
        t.abs()
    }

    fn point(&self, t: f64) -> Point3 {
        let t = self.normalize(t);
        Point3::new(
            self.radius * t.cos(),
            self.radius * t.sin(),
            (t / TAU) * self.step,
        )
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let t = self.normalize(t);
        Vector3::new(
            -self.radius * t.sin(),
            self.radius * t.cos(),
            self.step / TAU,
        )
    }

    fn implicit_derivative(&self, t: f64) -> Result<Vector3> {
        let p = self.point(t);
        let (dx, dy) = implicit_slope(t, &p, self.radius, self.radius)?;
        Ok(Vector3::new(dx, dy, self.step))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_4, SQRT_2};

    #[test]
    fn evaluate_at_zero() {
        let h = Helix::new(2.0, 3.0).unwrap();
        assert!((h.point(0.0) - Point3::new(2.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn one_revolution_rises_by_step() {
        let h = Helix::new(2.0, 3.0).unwrap();
        let p = h.point(TAU);
        assert!((p - Point3::new(2.0, 0.0, 3.0)).norm() < 1e-9);
    }

    #[test]
    fn z_is_not_folded() {
        let h = Helix::new(1.0, 2.0).unwrap();
        assert!((h.point(5.0 * TAU).z - 10.0).abs() < 1e-9);
    }

    #[test]
    fn negative_step_winds_down() {
        let h = Helix::new(1.0, -4.0).unwrap();
        assert!((h.step() + 4.0).abs() < TOLERANCE);
        assert!(h.point(TAU).z < 0.0);
    }

    #[test]
    fn negative_radius_is_absolute() {
        let h = Helix::new(-2.0, -1.5).unwrap();
        assert!((h.radius() - 2.0).abs() < TOLERANCE);
        assert!((h.step() + 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn negative_parameter_is_reflected() {
        let h = Helix::default();
        assert!((h.point(-2.5) - h.point(2.5)).norm() < TOLERANCE);
    }

    #[test]
    fn derivative_at_pi_over_4() {
        let h = Helix::new(2.0, 3.0).unwrap();
        let d = h.derivative(FRAC_PI_4);
        assert_relative_eq!(d, Vector3::new(-SQRT_2, SQRT_2, 3.0 / TAU), epsilon = 1e-12);
    }

    #[test]
    fn implicit_derivative_keeps_step() {
        let h = Helix::new(2.0, 3.0).unwrap();
        let d = h.implicit_derivative(FRAC_PI_4).unwrap();
        assert_relative_eq!(d, Vector3::new(-1.0, -1.0, 3.0), epsilon = 1e-9);
        assert!(h.implicit_derivative(0.0).is_err());
    }

    #[test]
    fn is_open() {
        let h = Helix::default();
        assert!(!h.is_closed());
        assert!(h.domain().t_max.is_infinite());
    }

    #[test]
    fn non_finite_step() {
        assert!(Helix::new(1.0, f64::NAN).is_err());
    }

    proptest! {
        #[test]
        fn point_lies_on_cylinder(r in 0.01f64..100.0, s in -50.0f64..50.0, t in 0.0f64..100.0) {
            let p = Helix::new(r, s).unwrap().point(t);
            prop_assert!((p.x * p.x + p.y * p.y - r * r).abs() < 1e-9 * r * r);
            prop_assert_eq!(p.z, (t / TAU) * s);
        }
    }
}
