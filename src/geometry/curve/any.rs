use crate::error::Result;
use crate::math::{Point3, Vector3};

use super::{Circle, Curve, CurveDomain, CurveKind, Ellipse, Helix};

/// Any of the supported curves, for heterogeneous collections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyCurve {
    /// A full circle.
    Circle(Circle),
    /// An axis-aligned ellipse.
    Ellipse(Ellipse),
    /// A helix around the Z axis.
    Helix(Helix),
}

impl AnyCurve {
    /// Returns the variant discriminator.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            AnyCurve::Circle(_) => CurveKind::Circle,
            AnyCurve::Ellipse(_) => CurveKind::Ellipse,
            AnyCurve::Helix(_) => CurveKind::Helix,
        }
    }

    /// Returns the circle if this is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            AnyCurve::Circle(c) => Some(c),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Curve {
        match self {
            AnyCurve::Circle(c) => c,
            AnyCurve::Ellipse(e) => e,
            AnyCurve::Helix(h) => h,
        }
    }
}

impl From<Circle> for AnyCurve {
    fn from(c: Circle) -> Self {
        AnyCurve::Circle(c)
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(e: Ellipse) -> Self {
        AnyCurve::Ellipse(e)
    }
}

impl From<Helix> for AnyCurve {
    fn from(h: Helix) -> Self {
        AnyCurve::Helix(h)
    }
}

impl Curve for AnyCurve {
    fn normalize(&self, t: f64) -> f64 {
        self.inner().normalize(t)
    }

    fn point(&self, t: f64) -> Point3 {
        self.inner().point(t)
    }

    fn derivative(&self, t: f64) -> Vector3 {
        self.inner().derivative(t)
    }

    fn implicit_derivative(&self, t: f64) -> Result<Vector3> {
        self.inner().implicit_derivative(t)
    }

    fn domain(&self) -> CurveDomain {
        self.inner().domain()
    }

    fn is_closed(&self) -> bool {
        self.inner().is_closed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use proptest::prelude::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(AnyCurve::from(Circle::default()).kind(), CurveKind::Circle);
        assert_eq!(AnyCurve::from(Ellipse::default()).kind(), CurveKind::Ellipse);
        assert_eq!(AnyCurve::from(Helix::default()).kind(), CurveKind::Helix);
    }

    #[test]
    fn as_circle_only_for_circles() {
        let c = AnyCurve::from(Circle::new(4.0).unwrap());
        assert!((c.as_circle().unwrap().radius() - 4.0).abs() < TOLERANCE);
        assert!(AnyCurve::from(Helix::default()).as_circle().is_none());
    }

    #[test]
    fn dispatches_to_variant() {
        let h = Helix::new(1.0, 2.0).unwrap();
        let any = AnyCurve::from(h);
        assert!((any.point(3.0) - h.point(3.0)).norm() < TOLERANCE);
        assert!((any.derivative(3.0) - h.derivative(3.0)).norm() < TOLERANCE);
        assert!(!any.is_closed());
    }

    proptest! {
        #[test]
        fn normalized_parameter_lies_in_domain(
            r in 0.01f64..100.0,
            b in 0.01f64..100.0,
            t in -1e6f64..1e6,
        ) {
            let curves: [AnyCurve; 3] = [
                Circle::new(r).unwrap().into(),
                Ellipse::new(r, b).unwrap().into(),
                Helix::new(r, b).unwrap().into(),
            ];
            for c in &curves {
                let n = c.normalize(t);
                prop_assert!(c.domain().contains(n), "{:?} put {} at {}", c.kind(), t, n);
            }
        }
    }
}
