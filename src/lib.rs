pub mod demo;
pub mod error;
pub mod geometry;
pub mod math;

pub use error::{CurvesError, GeometryError, Result};
pub use geometry::{AnyCurve, Circle, Curve, CurveKind, CurveSample, Ellipse, Helix};
