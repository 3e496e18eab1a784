//! Piecewise-polynomial interpolation over strictly increasing knots.
//!
//! Provides a linear interpolator and an Akima spline. Akima derives each
//! knot slope from the neighbouring secant slopes, so an outlier only bends
//! the curve locally instead of ringing across the whole range.

use thiserror::Error;

/// Interpolation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    /// Not enough knots for the method.
    #[error("Need at least {required} points, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    /// Abscissae are not strictly increasing.
    #[error("Abscissae must be strictly increasing (index {0})")]
    NonMonotonic(usize),

    /// x and y arrays differ in length.
    #[error("Length mismatch: {x} abscissae, {y} ordinates")]
    LengthMismatch { x: usize, y: usize },

    /// Abscissa or ordinate is NaN or infinite.
    #[error("Non-finite value at index {0}")]
    NonFinite(usize),

    /// Evaluation outside the knot range.
    #[error("Argument {value} outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Builds a [`PolynomialSpline`] through a set of knots.
pub trait Interpolator {
    fn interpolate(&self, x: &[f64], y: &[f64]) -> Result<PolynomialSpline, InterpolationError>;
}

/// Piecewise polynomial; segment `i` is evaluated at `t - knots[i]`.
#[derive(Debug, Clone)]
pub struct PolynomialSpline {
    knots: Vec<f64>,
    /// Ascending-power coefficients per segment
    coefficients: Vec<Vec<f64>>,
}

impl PolynomialSpline {
    /// Evaluate the spline inside its knot range.
    pub fn value(&self, t: f64) -> Result<f64, InterpolationError> {
        let min = self.knots[0];
        let max = self.knots[self.knots.len() - 1];
        if !(min..=max).contains(&t) {
            return Err(InterpolationError::OutOfRange { value: t, min, max });
        }

        let segment = self
            .knots
            .partition_point(|k| *k <= t)
            .saturating_sub(1)
            .min(self.coefficients.len() - 1);

        let dx = t - self.knots[segment];
        // Horner
        let value = self.coefficients[segment]
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * dx + c);
        Ok(value)
    }
}

fn check_knots(x: &[f64], y: &[f64], required: usize) -> Result<(), InterpolationError> {
    if x.len() != y.len() {
        return Err(InterpolationError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < required {
        return Err(InterpolationError::InsufficientPoints {
            required,
            actual: x.len(),
        });
    }
    if let Some(i) = x
        .iter()
        .zip(y)
        .position(|(a, b)| !a.is_finite() || !b.is_finite())
    {
        return Err(InterpolationError::NonFinite(i));
    }
    if let Some(i) = x.windows(2).position(|w| w[1] <= w[0]) {
        return Err(InterpolationError::NonMonotonic(i + 1));
    }
    Ok(())
}

/// Straight segments between consecutive knots.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: &[f64], y: &[f64]) -> Result<PolynomialSpline, InterpolationError> {
        check_knots(x, y, 2)?;

        let coefficients = x
            .windows(2)
            .zip(y.windows(2))
            .map(|(xs, ys)| vec![ys[0], (ys[1] - ys[0]) / (xs[1] - xs[0])])
            .collect();

        Ok(PolynomialSpline {
            knots: x.to_vec(),
            coefficients,
        })
    }
}

/// Akima cubic spline (needs at least 5 knots).
#[derive(Debug, Clone, Copy, Default)]
pub struct AkimaSplineInterpolator;

impl AkimaSplineInterpolator {
    pub const MIN_POINTS: usize = 5;
}

/// Derivative at `x[at]` of the parabola through knots i0, i1, i2.
fn three_point_derivative(x: &[f64], y: &[f64], at: usize, i0: usize, i1: usize, i2: usize) -> f64 {
    let (y0, y1, y2) = (y[i0], y[i1], y[i2]);
    let t = x[at] - x[i0];
    let t1 = x[i1] - x[i0];
    let t2 = x[i2] - x[i0];

    let a = (y2 - y0 - (t2 / t1 * (y1 - y0))) / (t2 * t2 - t1 * t2);
    let b = (y1 - y0 - a * t1 * t1) / t1;
    2.0 * a * t + b
}

/// Cubic Hermite segments from knot values and slopes.
fn hermite(x: &[f64], y: &[f64], slopes: &[f64]) -> PolynomialSpline {
    let coefficients = (0..x.len() - 1)
        .map(|i| {
            let w = x[i + 1] - x[i];
            let (yv, y_next) = (y[i], y[i + 1]);
            let (d, d_next) = (slopes[i], slopes[i + 1]);
            vec![
                yv,
                d,
                (3.0 * (y_next - yv) / w - 2.0 * d - d_next) / w,
                (2.0 * (yv - y_next) / w + d + d_next) / (w * w),
            ]
        })
        .collect();

    PolynomialSpline {
        knots: x.to_vec(),
        coefficients,
    }
}

impl Interpolator for AkimaSplineInterpolator {
    fn interpolate(&self, x: &[f64], y: &[f64]) -> Result<PolynomialSpline, InterpolationError> {
        check_knots(x, y, Self::MIN_POINTS)?;
        let n = x.len();

        let diffs: Vec<f64> = (0..n - 1)
            .map(|i| (y[i + 1] - y[i]) / (x[i + 1] - x[i]))
            .collect();

        let mut weights = vec![0.0; n - 1];
        for i in 1..n - 1 {
            weights[i] = (diffs[i] - diffs[i - 1]).abs();
        }

        let mut slopes = vec![0.0; n];
        for i in 2..n - 2 {
            let w_plus = weights[i + 1];
            let w_minus = weights[i - 1];
            slopes[i] = if w_plus == 0.0 && w_minus == 0.0 {
                // Collinear neighbourhood: distance-weighted secant average
                ((x[i + 1] - x[i]) * diffs[i - 1] + (x[i] - x[i - 1]) * diffs[i])
                    / (x[i + 1] - x[i - 1])
            } else {
                (w_plus * diffs[i - 1] + w_minus * diffs[i]) / (w_plus + w_minus)
            };
        }

        slopes[0] = three_point_derivative(x, y, 0, 0, 1, 2);
        slopes[1] = three_point_derivative(x, y, 1, 0, 1, 2);
        slopes[n - 2] = three_point_derivative(x, y, n - 2, n - 3, n - 2, n - 1);
        slopes[n - 1] = three_point_derivative(x, y, n - 1, n - 3, n - 2, n - 1);

        Ok(hermite(x, y, &slopes))
    }
}
