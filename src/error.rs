use thiserror::Error;

/// Top-level error type for the curves crate.
#[derive(Debug, Error)]
pub enum CurvesError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to curve construction and evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is not finite")]
    NonFiniteParameter { parameter: &'static str, value: f64 },

    #[error("implicit derivative is undefined at t = {t}")]
    UndefinedDerivative { t: f64 },

    #[error("parameter range [{min}, {max}) is empty or not finite")]
    InvalidRange { min: f64, max: f64 },
}

/// Convenience type alias for results using [`CurvesError`].
pub type Result<T> = std::result::Result<T, CurvesError>;
