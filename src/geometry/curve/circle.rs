use std::cmp::Ordering;
use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::{ensure_finite, fold, Point3, Vector3};

use super::{implicit_slope, Curve, CurveDomain};

/// A full circle of the given radius in the XY plane, centered at the origin.
///
/// The parameter is folded into `[0, 2*pi]` after taking its absolute value,
/// so `t` and `-t` evaluate to the same point.
///
/// `P(t) = (r * cos(t), r * sin(t), 0)`
///
/// Circles are ordered by radius.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle. A negative radius is stored as its magnitude.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is `NaN` or infinite.
    pub fn new(radius: f64) -> Result<Self> {
        let radius = ensure_finite("radius", radius)?.abs();
        Ok(Self { radius })
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Circle {}

impl PartialOrd for Circle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Circle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.radius.total_cmp(&other.radius)
    }
}

impl Curve for Circle {
    fn normalize(&self, t: f64) -> f64 {
        fold(t.abs(), TAU)
    }

    fn point(&self, t: f64) -> Point3 {
        let t = self.normalize(t);
        Point3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let t = self.normalize(t);
        Vector3::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }

    fn implicit_derivative(&self, t: f64) -> Result<Vector3> {
        let p = self.point(t);
        let (dx, dy) = implicit_slope(t, &p, self.radius, self.radius)?;
        Ok(Vector3::new(dx, dy, 0.0))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
