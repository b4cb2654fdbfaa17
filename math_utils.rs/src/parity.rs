pub trait Parity
where
	Self: Sized,
{
	#[must_use]
	fn is_even(&self) -> bool;

	#[must_use]
	fn is_odd(&self) -> bool {
		!self.is_even()
	}

	/// `(-1)^self`, as a float.
	///
	/// ```
	/// use math_utils::parity::Parity;
	///
	/// assert_eq!(0_usize.alternating_sign(), 1.);
	/// assert_eq!(1_usize.alternating_sign(), -1.);
	/// assert_eq!(42_u32.alternating_sign(), 1.);
	/// ```
	#[must_use]
	fn alternating_sign(&self) -> f64 {
		if self.is_even() {
			1.
		} else {
			-1.
		}
	}
}

macro_rules! impl_parity_for {
	($t:ty) => {
		impl Parity for $t {
			fn is_even(&self) -> bool {
				self & 1 == 0
			}
		}
	};
	($t:ty, $($others:ty),+) => {
		impl_parity_for!($t);
		impl_parity_for!($($others),+);
	};
}

impl_parity_for!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_a_bunch() {
		let mut toggle = true;
		for n in 0..100_usize {
			assert_eq!(n.is_even(), toggle);
			assert_eq!(n.is_odd(), !toggle);
			toggle ^= true;
		}
	}

	#[test]
	fn test_alternating_sign_matches_powi() {
		for n in 0..64_u32 {
			#[allow(clippy::cast_possible_wrap)]
			let expected = (-1f64).powi(n as i32);
			assert!((n.alternating_sign() - expected).abs() < f64::EPSILON);
		}
	}
}
