//! Closing a sampled signal on the right end of its interval.
//!
//! A signal sampled at `N` uniform points over `[0, L)` lacks the value at `x = L`.
//! [`ClosedSignal::from_half_open`] appends it by linear extrapolation from the
//! last two samples, which makes closed-interval quadrature possible.

use crate::uniform_grid::UniformGrid;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ExtrapolationError {
	#[error("linear extrapolation needs at least 2 samples, got {0}")]
	TooFewSamples(usize),
	#[error("interval length must be positive and finite, got {0}")]
	InvalidLength(f64),
}

/// The value that follows `signal` under a local-linear assumption,
/// i.e. `signal[N-1] + (signal[N-1] - signal[N-2])`.
///
/// # Errors
/// - [`ExtrapolationError::TooFewSamples`] if the signal has less than 2 samples
pub fn linear_extrapolation(signal: &[f64]) -> Result<f64, ExtrapolationError> {
	match signal {
		[.., before_last, last] => Ok(last + (last - before_last)),
		_ => Err(ExtrapolationError::TooFewSamples(signal.len())),
	}
}

/// A signal sampled at `N + 1` uniform points covering `[0, L]`, both ends included.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedSignal {
	xs: Vec<f64>,
	ys: Vec<f64>,
}

impl ClosedSignal {
	/// Build the closed signal from `N` samples covering `[0, length)` with step `length / N`.
	///
	/// # Errors
	/// - [`ExtrapolationError::TooFewSamples`] if the signal has less than 2 samples
	/// - [`ExtrapolationError::InvalidLength`] if `length` is not a positive finite number
	pub fn from_half_open(signal: &[f64], length: f64) -> Result<Self, ExtrapolationError> {
		if !(length.is_finite() && length > 0.) {
			return Err(ExtrapolationError::InvalidLength(length));
		}
		let boundary_value = linear_extrapolation(signal)?;

		let mut ys = Vec::with_capacity(signal.len() + 1);
		ys.extend_from_slice(signal);
		ys.push(boundary_value);

		Ok(Self {
			xs: UniformGrid::from_length(length, signal.len()).closed_points(),
			ys,
		})
	}

	#[must_use]
	pub fn xs(&self) -> &[f64] {
		&self.xs
	}

	#[must_use]
	pub fn ys(&self) -> &[f64] {
		&self.ys
	}

	/// The extrapolated value at the right end of the interval.
	#[allow(clippy::missing_panics_doc)] // REASON: invariant (ys.len() >= 3) guaranteed by the constructor
	#[must_use]
	pub fn boundary_value(&self) -> f64 {
		*self
			.ys
			.last()
			.expect("internal error: a closed signal always has at least one sample")
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.ys.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.ys.is_empty()
	}

	/// Pointwise product of the samples with `weight(x)`, e.g. a basis function.
	#[must_use]
	pub fn weighted_by(&self, weight: impl Fn(f64) -> f64) -> Vec<f64> {
		self.xs
			.iter()
			.zip(self.ys.iter())
			.map(|(&x, &y)| y * weight(x))
			.collect()
	}
}
