/// Fourier coefficients `a[0..=maximum_n]` (cosine terms) and `b[0..=maximum_n]` (sine terms),
/// indexed by harmonic order.
///
/// Both sequences always have the same length. Depending on the expansion type
/// only one of them is populated, the other one is all zeros.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoefficientSet {
	a: Vec<f64>,
	b: Vec<f64>,
}

impl CoefficientSet {
	pub(crate) fn from_cosine_terms(a: Vec<f64>) -> Self {
		let b = vec![0.; a.len()];
		Self { a, b }
	}

	pub(crate) fn from_sine_terms(b: Vec<f64>) -> Self {
		let a = vec![0.; b.len()];
		Self { a, b }
	}

	#[must_use]
	pub fn a(&self) -> &[f64] {
		&self.a
	}

	#[must_use]
	pub fn b(&self) -> &[f64] {
		&self.b
	}

	/// The highest harmonic order stored in this set.
	#[must_use]
	pub fn maximum_n(&self) -> usize {
		self.a.len().saturating_sub(1)
	}

	/// A copy of this set restricted to the harmonics `0..=n_max`.
	///
	/// `n_max` is clamped to [`CoefficientSet::maximum_n`].
	#[must_use]
	pub fn truncated(&self, n_max: usize) -> Self {
		let len = (n_max + 1).min(self.a.len());
		Self {
			a: self.a[..len].to_vec(),
			b: self.b[..len].to_vec(),
		}
	}

	#[must_use]
	pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
		(self.a, self.b)
	}
}
