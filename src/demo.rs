//! Demonstration driver: random curve generation, sampling, filtering and
//! sorting of a mixed collection.

use std::f64::consts::FRAC_PI_4;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GeometryError, Result};
use crate::geometry::curve::{AnyCurve, Circle, Curve, CurveKind, CurveSample, Ellipse, Helix};

/// Parameters controlling the demo run.
#[derive(Debug, Clone, Copy)]
pub struct DemoParams {
    /// Number of curves to generate.
    pub count: usize,
    /// Lower bound (inclusive) for random curve parameters.
    pub min_param: f64,
    /// Upper bound (exclusive) for random curve parameters.
    pub max_param: f64,
    /// Parameter value at which every curve is sampled.
    pub sample_t: f64,
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            count: 10,
            min_param: 1.0,
            max_param: 11.0,
            sample_t: FRAC_PI_4,
            seed: None,
        }
    }
}

/// Generates `params.count` curves of uniformly random kind.
///
/// Every curve parameter is drawn uniformly from
/// `[params.min_param, params.max_param)`. Helix steps are drawn from the
/// same range, so they are positive.
///
/// # Errors
///
/// Returns an error if the parameter range is empty, not finite, or too
/// wide for its width to be finite.
pub fn random_curves<R: Rng>(rng: &mut R, params: &DemoParams) -> Result<Vec<AnyCurve>> {
    let (min, max) = (params.min_param, params.max_param);
    if !(min.is_finite() && max.is_finite() && min < max && (max - min).is_finite()) {
        return Err(GeometryError::InvalidRange { min, max }.into());
    }

    let curves = (0..params.count)
        .map(|_| {
            let kind = match rng.gen_range(0..3) {
                0 => CurveKind::Circle,
                1 => CurveKind::Ellipse,
                _ => CurveKind::Helix,
            };
            let p1 = rng.gen_range(min..max);
            let p2 = rng.gen_range(min..max);
            let curve: AnyCurve = match kind {
                CurveKind::Circle => Circle::new(p1)?.into(),
                CurveKind::Ellipse => Ellipse::new(p1, p2)?.into(),
                CurveKind::Helix => Helix::new(p1, p2)?.into(),
            };
            tracing::trace!(%kind, p1, p2, "generated curve");
            Ok(curve)
        })
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = curves.len(), "generated random curves");
    Ok(curves)
}

/// Returns the circles in `curves`, borrowing them in their original order.
#[must_use]
pub fn circles(curves: &[AnyCurve]) -> Vec<&Circle> {
    curves.iter().filter_map(AnyCurve::as_circle).collect()
}

/// Sorts circles by ascending radius.
pub fn sort_by_radius(circles: &mut [&Circle]) {
    circles.sort();
}

/// Sums the radii of `circles`.
#[must_use]
pub fn total_radius(circles: &[&Circle]) -> f64 {
    circles.iter().map(|c| c.radius()).sum()
}

/// Outcome of a demo run.
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Kind and sample of every generated curve, in generation order.
    pub samples: Vec<(CurveKind, CurveSample)>,
    /// Radii of the circles, ascending.
    pub radii: Vec<f64>,
    /// Sum of [`DemoReport::radii`].
    pub total_radius: f64,
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, sample) in &self.samples {
            writeln!(f, "{sample}")?;
            writeln!(f)?;
        }
        write!(f, "Circles:\t")?;
        for (i, r) in self.radii.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{r:.2}")?;
        }
        writeln!(f)?;
        write!(f, "Sum of radii:\t{:.2}", self.total_radius)
    }
}

/// Runs the demo with an RNG seeded from `params.seed`, or from entropy.
///
/// # Errors
///
/// Returns an error if the parameter range is invalid.
pub fn run(params: &DemoParams) -> Result<DemoReport> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_with(&mut rng, params)
}

/// Runs the demo with the given RNG: generate, sample, filter circles,
/// sort them and sum their radii.
///
/// # Errors
///
/// Returns an error if the parameter range is invalid.
pub fn run_with<R: Rng>(rng: &mut R, params: &DemoParams) -> Result<DemoReport> {
    let curves = random_curves(rng, params)?;

    let samples = curves
        .iter()
        .map(|c| (c.kind(), c.sample(params.sample_t)))
        .collect();

    let mut selected = circles(&curves);
    sort_by_radius(&mut selected);
    let total = total_radius(&selected);
    tracing::info!(
        curves = curves.len(),
        circles = selected.len(),
        total_radius = total,
        "demo finished"
    );

    Ok(DemoReport {
        samples,
        radii: selected.iter().map(|c| c.radius()).collect(),
        total_radius: total,
    })
}
