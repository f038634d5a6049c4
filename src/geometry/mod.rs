pub mod curve;

pub use curve::{
    AnyCurve, Circle, Curve, CurveDomain, CurveKind, CurveSample, Ellipse, Helix,
};
