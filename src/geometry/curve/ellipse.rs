use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::{ensure_finite, fold, Point3, Vector3};

use super::{implicit_slope, Curve, CurveDomain};

/// An axis-aligned ellipse in the XY plane, centered at the origin.
///
/// `a` is the semi-axis along X and `b` the semi-axis along Y; either may be
/// the longer one. The parameter is folded like a [`Circle`](super::Circle)'s.
///
/// `P(t) = (a * cos(t), b * sin(t), 0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    a: f64,
    b: f64,
}

impl Ellipse {
    /// Creates a new ellipse. Negative semi-axes are stored as magnitudes.
    ///
    /// # Arguments
    ///
    /// * `a` - Semi-axis length along X
    /// * `b` - Semi-axis length along Y
    ///
    /// # Errors
    ///
    /// Returns an error if either semi-axis is `NaN` or infinite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        let a = ensure_finite("a", a)?.abs();
        let b = ensure_finite("b", b)?.abs();
        Ok(Self { a, b })
    }

    /// Returns the semi-axis length along X.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the semi-axis length along Y.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self { a: 1.0, b: 1.5 }
    }
}

impl Curve for Ellipse {
    fn normalize(&self, t: f64) -> f64 {
        fold(t.abs(), TAU)
    }

    fn point(&self, t: f64) -> Point3 {
        let t = self.normalize(t);
        Point3::new(self.a * t.cos(), self.b * t.sin(), 0.0)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let t = self.normalize(t);
        Vector3::new(-self.a * t.sin(), self.b * t.cos(), 0.0)
    }

    fn implicit_derivative(&self, t: f64) -> Result<Vector3> {
        let p = self.point(t);
        let (dx, dy) = implicit_slope(t, &p, self.a, self.b)?;
        Ok(Vector3::new(dx, dy, 0.0))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
