#![allow(clippy::cast_precision_loss)]

/// A uniform partition of an interval into `n_of_steps` steps of equal width.
///
/// The grid can be sampled either as a closed set of points (both ends included,
/// `n_of_steps + 1` points) or as a half-open set (`n_of_steps` points, end excluded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid {
	interval: (f64, f64),
	n_of_steps: usize,
}

impl UniformGrid {
	#[must_use]
	pub fn new(interval: (f64, f64), n_of_steps: usize) -> Self {
		debug_assert!(
			interval.0 <= interval.1,
			"interval {}..{} is reversed",
			interval.0,
			interval.1
		);
		Self {
			interval,
			n_of_steps,
		}
	}

	/// Grid over `[0, length]` with `n_of_steps` steps.
	#[must_use]
	pub fn from_length(length: f64, n_of_steps: usize) -> Self {
		Self::new((0., length), n_of_steps)
	}

	#[must_use]
	pub fn interval(&self) -> (f64, f64) {
		self.interval
	}

	#[must_use]
	pub fn n_of_steps(&self) -> usize {
		self.n_of_steps
	}

	/// Distance between two consecutive points. Zero for an empty grid.
	#[must_use]
	pub fn step(&self) -> f64 {
		if self.n_of_steps == 0 {
			0.
		} else {
			(self.interval.1 - self.interval.0) / self.n_of_steps as f64
		}
	}

	/// The `k`-th point of the grid, i.e. `start + k * step`.
	///
	/// `point(n_of_steps)` is the end of the interval.
	#[must_use]
	pub fn point(&self, k: usize) -> f64 {
		debug_assert!(
			k <= self.n_of_steps,
			"index {} is out of range. n_of_steps is {}",
			k,
			self.n_of_steps
		);
		if k == self.n_of_steps {
			self.interval.1
		} else {
			self.interval.0 + self.step() * k as f64
		}
	}

	/// `[start, start + step, ..., end]`
	#[must_use]
	pub fn closed_points(&self) -> Vec<f64> {
		(0..=self.n_of_steps).map(|k| self.point(k)).collect()
	}

	/// `[start, start + step, ..., end - step]`
	#[must_use]
	pub fn half_open_points(&self) -> Vec<f64> {
		(0..self.n_of_steps).map(|k| self.point(k)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::UniformGrid;

	#[test]
	fn test_step() {
		let grid = UniformGrid::new((0., 100.), 10);
		assert!((grid.step() - 10.).abs() < f64::EPSILON);
		assert!(UniformGrid::new((0., 1.), 0).step().abs() < f64::EPSILON);
	}

	#[test]
	fn test_closed_points() {
		let grid = UniformGrid::from_length(0.3, 3);
		let points = grid.closed_points();
		assert_eq!(points.len(), 4);
		assert!(points[0].abs() < f64::EPSILON);
		assert!((points[1] - 0.1).abs() < 1e-15);
		assert!((points[2] - 0.2).abs() < 1e-15);
		// the end of the interval is hit exactly
		assert_eq!(points[3].to_bits(), 0.3f64.to_bits());
	}

	#[test]
	fn test_half_open_points() {
		let grid = UniformGrid::new((-10., 10.), 4);
		let points = grid.half_open_points();
		assert_eq!(points, vec![-10., -5., 0., 5.]);
	}

	#[test]
	fn test_strictly_increasing() {
		let grid = UniformGrid::from_length(0.3, 301);
		let points = grid.closed_points();
		assert_eq!(points.len(), 302);
		assert!(points.windows(2).all(|w| w[0] < w[1]));
	}
}
