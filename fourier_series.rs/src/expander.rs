#![allow(clippy::cast_precision_loss)]

use std::{f64::consts::PI, ops::RangeInclusive};

use math_utils::{
	extrapolation::ClosedSignal, parity::Parity, quadrature::simpson, uniform_grid::UniformGrid,
};
use tracing::{debug, trace};

use crate::{CoefficientSet, ExpansionError, ExpansionType};

/// Harmonic order requested when the caller has no better estimate.
/// It is clamped to half the signal length anyway.
pub const DEFAULT_MAXIMUM_N: usize = 1000;

/// Shortest signal accepted by [`Expander::coefficients`].
pub const MIN_SIGNAL_LENGTH: usize = 4;

/// Computes truncated Fourier series of signals sampled over `[0, L)`
/// and reconstructs signals from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expander {
	length: f64,
}

/// Basis functions of a series, with the angular scale of the fundamental.
#[derive(Debug, Clone, Copy)]
enum Basis {
	Sine { scale: f64 },
	Cosine { scale: f64 },
}

impl Basis {
	/// Callers guarantee `a` is not empty for cosine series.
	fn sum(self, a: &[f64], b: &[f64], x: f64) -> f64 {
		match self {
			Self::Sine { scale } => b
				.iter()
				.enumerate()
				.map(|(n, b_n)| b_n * (n as f64 * scale * x).sin())
				.sum(),
			Self::Cosine { scale } => {
				a[0] + a
					.iter()
					.enumerate()
					.skip(1)
					.map(|(n, a_n)| a_n * (n as f64 * scale * x).cos())
					.sum::<f64>()
			}
		}
	}
}

impl Expander {
	/// # Errors
	/// - [`ExpansionError::InvalidInput`] if `length` is not a positive finite number
	pub fn new(length: f64) -> Result<Self, ExpansionError> {
		if length.is_finite() && length > 0. {
			Ok(Self { length })
		} else {
			Err(ExpansionError::InvalidInput(format!(
				"interval length must be positive and finite, got {length}"
			)))
		}
	}

	/// The length `L` of the interval `[0, L]` the signals are defined on.
	#[must_use]
	pub const fn length(&self) -> f64 {
		self.length
	}

	/// Compute the coefficients of the `expansion_type` series of `signal`, which is
	/// assumed to be sampled uniformly over `[0, L)`.
	///
	/// `maximum_n` is clamped to `signal.len() / 2`, so the returned set holds
	/// `min(maximum_n, signal.len() / 2) + 1` harmonics.
	///
	/// # Errors
	/// - [`ExpansionError::InvalidInput`] if the signal has less than [`MIN_SIGNAL_LENGTH`] samples
	///   or contains non-finite values
	/// - [`ExpansionError::NotImplemented`] for [`ExpansionType::QuarterOdd`]
	pub fn coefficients(
		&self,
		signal: &[f64],
		expansion_type: ExpansionType,
		maximum_n: usize,
	) -> Result<CoefficientSet, ExpansionError> {
		validate_signal(signal)?;

		let clamped_n = maximum_n.min(signal.len() / 2);
		if clamped_n < maximum_n {
			debug!(
				requested = maximum_n,
				clamped = clamped_n,
				"maximum harmonic order clamped to half the signal length"
			);
		}
		debug!(
			%expansion_type,
			n_of_samples = signal.len(),
			maximum_n = clamped_n,
			length = self.length,
			"computing Fourier coefficients"
		);

		let closed = ClosedSignal::from_half_open(signal, self.length)?;
		match expansion_type {
			ExpansionType::Odd => self.half_range_odd(&closed, clamped_n),
			ExpansionType::Even => self.half_range_even(&closed, clamped_n),
			ExpansionType::QuarterEven => self.quarter_range_even(&closed, clamped_n),
			ExpansionType::QuarterOdd => Err(expansion_type.not_implemented()),
		}
	}

	/// Sum the truncated series defined by `a` (cosine terms) and `b` (sine terms) at `x`.
	///
	/// # Errors
	/// - [`ExpansionError::InvalidInput`] if a cosine series is requested with an empty `a`
	/// - [`ExpansionError::NotImplemented`] for [`ExpansionType::QuarterOdd`]
	pub fn evaluate(
		&self,
		a: &[f64],
		b: &[f64],
		x: f64,
		expansion_type: ExpansionType,
	) -> Result<f64, ExpansionError> {
		Ok(self.basis(a, expansion_type)?.sum(a, b, x))
	}

	/// # Errors
	/// See [`Expander::evaluate`].
	pub fn evaluate_set(
		&self,
		coefficients: &CoefficientSet,
		x: f64,
		expansion_type: ExpansionType,
	) -> Result<f64, ExpansionError> {
		self.evaluate(coefficients.a(), coefficients.b(), x, expansion_type)
	}

	/// Evaluate the series at `signal_length` uniformly spaced points over `[0, L)`,
	/// i.e. at `x_k = k * L / signal_length`.
	///
	/// # Errors
	/// See [`Expander::evaluate`].
	pub fn reconstruct(
		&self,
		a: &[f64],
		b: &[f64],
		expansion_type: ExpansionType,
		signal_length: usize,
	) -> Result<Vec<f64>, ExpansionError> {
		let basis = self.basis(a, expansion_type)?;
		trace!(
			%expansion_type,
			signal_length,
			n_of_harmonics = a.len().max(b.len()),
			"reconstructing signal"
		);

		let xs = UniformGrid::from_length(self.length, signal_length).half_open_points();

		#[cfg(feature = "parallel")]
		{
			use rayon::prelude::*;
			Ok(xs.into_par_iter().map(|x| basis.sum(a, b, x)).collect())
		}
		#[cfg(not(feature = "parallel"))]
		{
			Ok(xs.into_iter().map(|x| basis.sum(a, b, x)).collect())
		}
	}

	/// # Errors
	/// See [`Expander::evaluate`].
	pub fn reconstruct_set(
		&self,
		coefficients: &CoefficientSet,
		expansion_type: ExpansionType,
		signal_length: usize,
	) -> Result<Vec<f64>, ExpansionError> {
		self.reconstruct(
			coefficients.a(),
			coefficients.b(),
			expansion_type,
			signal_length,
		)
	}

	fn basis(&self, a: &[f64], expansion_type: ExpansionType) -> Result<Basis, ExpansionError> {
		match expansion_type {
			ExpansionType::Odd => Ok(Basis::Sine {
				scale: PI / self.length,
			}),
			ExpansionType::QuarterOdd => Err(expansion_type.not_implemented()),
			_ if a.is_empty() => Err(ExpansionError::InvalidInput(format!(
				"a {expansion_type} series needs at least the constant term"
			))),
			ExpansionType::Even => Ok(Basis::Cosine {
				scale: PI / self.length,
			}),
			ExpansionType::QuarterEven => Ok(Basis::Cosine {
				scale: PI / (2. * self.length),
			}),
		}
	}

	fn half_range_odd(
		&self,
		signal: &ClosedSignal,
		maximum_n: usize,
	) -> Result<CoefficientSet, ExpansionError> {
		let l = self.length;
		let b = per_harmonic(0..=maximum_n, |n| {
			if n == 0 {
				return Ok(0.);
			}
			let scale = n as f64 * PI / l;
			let integral = simpson(&signal.weighted_by(|x| (scale * x).sin()), signal.xs())?;
			Ok(2. / l * integral)
		})?;
		Ok(CoefficientSet::from_sine_terms(b))
	}

	fn half_range_even(
		&self,
		signal: &ClosedSignal,
		maximum_n: usize,
	) -> Result<CoefficientSet, ExpansionError> {
		let l = self.length;
		let a = per_harmonic(0..=maximum_n, |n| {
			if n == 0 {
				return Ok(simpson(signal.ys(), signal.xs())? / l);
			}
			let scale = n as f64 * PI / l;
			let integral = simpson(&signal.weighted_by(|x| (scale * x).cos()), signal.xs())?;
			Ok(2. / l * integral)
		})?;
		Ok(CoefficientSet::from_cosine_terms(a))
	}

	/// The extension is mirrored about `x = 0` and point-reflected about `(L, f(L))`.
	fn quarter_range_even(
		&self,
		signal: &ClosedSignal,
		maximum_n: usize,
	) -> Result<CoefficientSet, ExpansionError> {
		let l = self.length;
		let f_l = signal.boundary_value();
		let a = per_harmonic(0..=maximum_n, |n| {
			if n == 0 {
				return Ok(f_l);
			}
			let n_pi = n as f64 * PI;
			let boundary_term = -8. * l * f_l / n_pi * (n_pi / 2.).sin();
			let integral = if n.is_odd() {
				let scale = n_pi / (2. * l);
				simpson(&signal.weighted_by(|x| (scale * x).cos()), signal.xs())?
			} else {
				0.
			};
			let integral_term = 2. * (1. - n.alternating_sign()) * integral;
			Ok((boundary_term + integral_term) / (2. * l))
		})?;
		Ok(CoefficientSet::from_cosine_terms(a))
	}
}

pub(crate) fn validate_signal(signal: &[f64]) -> Result<(), ExpansionError> {
	if signal.len() < MIN_SIGNAL_LENGTH {
		return Err(ExpansionError::InvalidInput(format!(
			"expected a signal with at least {MIN_SIGNAL_LENGTH} samples, got {}",
			signal.len()
		)));
	}
	if let Some(i) = signal.iter().position(|v| !v.is_finite()) {
		return Err(ExpansionError::InvalidInput(format!(
			"sample {i} is not a finite number ({})",
			signal[i]
		)));
	}
	Ok(())
}

/// Harmonics are independent of each other, with the `parallel` feature they are computed
/// on the rayon thread pool.
fn per_harmonic<F>(harmonics: RangeInclusive<usize>, f: F) -> Result<Vec<f64>, ExpansionError>
where
	F: Fn(usize) -> Result<f64, ExpansionError> + Send + Sync,
{
	#[cfg(feature = "parallel")]
	{
		use rayon::prelude::*;
		harmonics.into_par_iter().map(f).collect()
	}
	#[cfg(not(feature = "parallel"))]
	{
		harmonics.map(f).collect()
	}
}
