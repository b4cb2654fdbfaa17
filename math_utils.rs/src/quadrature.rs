//! Simpson's rule over sampled data.

use crate::parity::Parity;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureError {
	#[error("Simpson's rule needs at least 3 points, got {0}")]
	TooFewPoints(usize),
	#[error("x and y have different lengths ({x_len} and {y_len})")]
	LengthMismatch { x_len: usize, y_len: usize },
	#[error("x values must be strictly increasing")]
	NonIncreasingAbscissae,
	#[error("samples must be finite numbers")]
	NonFiniteValue,
}

/// Integrate the function sampled at `(xs[i], ys[i])` over `[xs[0], xs[n-1]]`
/// with the composite Simpson's rule.
///
/// The spacing of `xs` does not need to be uniform. With an odd number of points the
/// composite rule covers the whole range and is exact for cubics. With an even number
/// of points the last interval is integrated with the quadratic through the last three
/// points, so quadratics are still integrated exactly.
///
/// ```
/// use math_utils::quadrature::simpson;
///
/// let xs = [0., 0.5, 1., 1.5, 2.];
/// let ys: Vec<f64> = xs.iter().map(|x| x * x * x).collect();
/// assert!((simpson(&ys, &xs).unwrap() - 4.).abs() < 1e-12);
/// ```
///
/// # Errors
/// - [`QuadratureError::TooFewPoints`] with less than 3 points
/// - [`QuadratureError::LengthMismatch`] if `xs` and `ys` differ in length
/// - [`QuadratureError::NonIncreasingAbscissae`] if `xs` is not strictly increasing
/// - [`QuadratureError::NonFiniteValue`] if any value is NaN or infinite
pub fn simpson(ys: &[f64], xs: &[f64]) -> Result<f64, QuadratureError> {
	validate(ys, xs)?;

	let n = ys.len();
	if n.is_odd() {
		return Ok(composite(ys, xs));
	}

	let head = composite(&ys[..n - 1], &xs[..n - 1]);

	let h0 = xs[n - 2] - xs[n - 3];
	let h1 = xs[n - 1] - xs[n - 2];
	let alpha = (2. * h1 * h1 + 3. * h0 * h1) / (6. * (h0 + h1));
	let beta = (h1 * h1 + 3. * h0 * h1) / (6. * h0);
	let eta = h1 * h1 * h1 / (6. * h0 * (h0 + h1));

	Ok(head + alpha * ys[n - 1] + beta * ys[n - 2] - eta * ys[n - 3])
}

fn validate(ys: &[f64], xs: &[f64]) -> Result<(), QuadratureError> {
	if xs.len() != ys.len() {
		return Err(QuadratureError::LengthMismatch {
			x_len: xs.len(),
			y_len: ys.len(),
		});
	}
	if ys.len() < 3 {
		return Err(QuadratureError::TooFewPoints(ys.len()));
	}
	if xs.iter().chain(ys).any(|v| !v.is_finite()) {
		return Err(QuadratureError::NonFiniteValue);
	}
	if xs.windows(2).any(|w| w[0] >= w[1]) {
		return Err(QuadratureError::NonIncreasingAbscissae);
	}
	Ok(())
}

/// Simpson's rule over consecutive pairs of intervals. `ys.len()` must be odd.
fn composite(ys: &[f64], xs: &[f64]) -> f64 {
	debug_assert!(ys.len().is_odd(), "composite rule needs an even number of intervals");

	ys.windows(3)
		.zip(xs.windows(3))
		.step_by(2)
		.map(|(y, x)| {
			let h0 = x[1] - x[0];
			let h1 = x[2] - x[1];
			let h_sum = h0 + h1;
			let h_ratio = h0 / h1;
			h_sum / 6.
				* (y[0] * (2. - 1. / h_ratio)
					+ y[1] * (h_sum * h_sum / (h0 * h1))
					+ y[2] * (2. - h_ratio))
		})
		.sum()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample(f: impl Fn(f64) -> f64, xs: &[f64]) -> Vec<f64> {
		xs.iter().map(|&x| f(x)).collect()
	}

	#[allow(clippy::cast_precision_loss)]
	fn uniform(start: f64, end: f64, n_of_points: usize) -> Vec<f64> {
		(0..n_of_points)
			.map(|i| start + (end - start) * i as f64 / (n_of_points - 1) as f64)
			.collect()
	}

	#[test]
	fn test_cubic_is_exact_with_odd_point_count() {
		let xs = uniform(0., 3., 7);
		let ys = sample(|x| 2. * x * x * x - x + 1., &xs);
		// 2 * 81 / 4 - 9 / 2 + 3
		assert!((simpson(&ys, &xs).unwrap() - 39.).abs() < 1e-12);
	}

	#[test]
	fn test_quadratic_is_exact_with_even_point_count() {
		let xs = [0., 1., 2., 3.];
		let ys = sample(|x| x * x, &xs);
		assert!((simpson(&ys, &xs).unwrap() - 9.).abs() < 1e-12);

		let xs = uniform(-1., 2., 10);
		let ys = sample(|x| 3. * x * x + 2. * x, &xs);
		// [x^3 + x^2] from -1 to 2
		assert!((simpson(&ys, &xs).unwrap() - 12.).abs() < 1e-12);
	}

	#[test]
	fn test_non_uniform_spacing() {
		let xs = [0., 0.1, 0.5, 0.6, 1.];
		let ys = sample(|x| x * x, &xs);
		assert!((simpson(&ys, &xs).unwrap() - 1. / 3.).abs() < 1e-12);
	}

	#[test]
	fn test_sine_over_half_period() {
		let xs = uniform(0., std::f64::consts::PI, 302);
		let ys = sample(f64::sin, &xs);
		assert!((simpson(&ys, &xs).unwrap() - 2.).abs() < 1e-8);
	}

	#[test]
	fn test_errors() {
		assert_eq!(
			simpson(&[1., 2.], &[0., 1.]),
			Err(QuadratureError::TooFewPoints(2))
		);
		assert_eq!(
			simpson(&[1., 2., 3.], &[0., 1.]),
			Err(QuadratureError::LengthMismatch { x_len: 2, y_len: 3 })
		);
		assert_eq!(
			simpson(&[1., 2., 3.], &[0., 1., 1.]),
			Err(QuadratureError::NonIncreasingAbscissae)
		);
		assert_eq!(
			simpson(&[1., f64::NAN, 3.], &[0., 1., 2.]),
			Err(QuadratureError::NonFiniteValue)
		);
	}
}
