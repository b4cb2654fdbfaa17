use math_utils::{extrapolation::linear_extrapolation, uniform_grid::UniformGrid};

use crate::{expander::validate_signal, ExpansionError, ExpansionType, Expander};

/// A signal extended beyond `[0, L)` by the symmetry an expansion type assumes.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricExtension {
	xs: Vec<f64>,
	ys: Vec<f64>,
}

impl SymmetricExtension {
	#[must_use]
	pub fn xs(&self) -> &[f64] {
		&self.xs
	}

	#[must_use]
	pub fn ys(&self) -> &[f64] {
		&self.ys
	}

	#[must_use]
	pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
		(self.xs, self.ys)
	}
}

impl Expander {
	/// Extend `signal`, sampled over `[0, L)`, to the interval its series is periodic on:
	/// `[-L, L)` for half-range expansions and `[-2L, 2L)` for quarter-range ones.
	///
	/// Samples left of the origin are mirrored in sample order, so `x = -Δx` takes the
	/// value of `x = 0`. The quarter-range even extension is additionally point-reflected
	/// about the extrapolated boundary value at `x = L`.
	///
	/// # Errors
	/// - [`ExpansionError::InvalidInput`] on the same signals rejected by [`Expander::coefficients`]
	/// - [`ExpansionError::NotImplemented`] for [`ExpansionType::QuarterOdd`]
	pub fn symmetric_extension(
		&self,
		signal: &[f64],
		expansion_type: ExpansionType,
	) -> Result<SymmetricExtension, ExpansionError> {
		validate_signal(signal)?;
		let l = self.length();

		let (interval, ys): ((f64, f64), Vec<f64>) = match expansion_type {
			ExpansionType::Odd => (
				(-l, l),
				signal
					.iter()
					.rev()
					.map(|v| -v)
					.chain(signal.iter().copied())
					.collect(),
			),
			ExpansionType::Even => (
				(-l, l),
				signal.iter().rev().chain(signal).copied().collect(),
			),
			ExpansionType::QuarterEven => {
				let f_l = linear_extrapolation(signal)?;
				let reflected = |v: &f64| 2. * f_l - v;
				(
					(-2. * l, 2. * l),
					signal
						.iter()
						.map(reflected)
						.chain(signal.iter().rev().copied())
						.chain(signal.iter().copied())
						.chain(signal.iter().rev().map(reflected))
						.collect(),
				)
			}
			ExpansionType::QuarterOdd => return Err(expansion_type.not_implemented()),
		};

		Ok(SymmetricExtension {
			xs: UniformGrid::new(interval, ys.len()).half_open_points(),
			ys,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SIGNAL: [f64; 4] = [1., 2., 3., 4.];

	#[test]
	fn test_odd_extension() {
		let expander = Expander::new(2.).unwrap();
		let extension = expander
			.symmetric_extension(&SIGNAL, ExpansionType::Odd)
			.unwrap();
		assert_eq!(extension.ys(), &[-4., -3., -2., -1., 1., 2., 3., 4.]);
		assert_eq!(
			extension.xs(),
			&[-2., -1.5, -1., -0.5, 0., 0.5, 1., 1.5]
		);
	}

	#[test]
	fn test_even_extension() {
		let expander = Expander::new(2.).unwrap();
		let extension = expander
			.symmetric_extension(&SIGNAL, ExpansionType::Even)
			.unwrap();
		assert_eq!(extension.ys(), &[4., 3., 2., 1., 1., 2., 3., 4.]);
	}

	#[test]
	fn test_quarter_even_extension() {
		let expander = Expander::new(1.).unwrap();
		let (xs, ys) = expander
			.symmetric_extension(&SIGNAL, ExpansionType::QuarterEven)
			.unwrap()
			.into_parts();
		// boundary value is 5, reflected samples are 2 * 5 - v
		assert_eq!(
			ys,
			vec![9., 8., 7., 6., 4., 3., 2., 1., 1., 2., 3., 4., 6., 7., 8., 9.]
		);
		assert_eq!(xs.len(), 16);
		assert!((xs[0] + 2.).abs() < f64::EPSILON);
		assert!(xs[8].abs() < f64::EPSILON);
		assert!((xs[15] - 1.75).abs() < f64::EPSILON);
	}

	#[test]
	fn test_errors() {
		let expander = Expander::new(1.).unwrap();
		assert_eq!(
			expander.symmetric_extension(&SIGNAL, ExpansionType::QuarterOdd),
			Err(ExpansionError::NotImplemented("quarter_odd".to_owned()))
		);
		assert!(matches!(
			expander.symmetric_extension(&[1., 2., 3.], ExpansionType::Even),
			Err(ExpansionError::InvalidInput(_))
		));
	}
}
