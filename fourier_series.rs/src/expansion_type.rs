use std::{fmt::Display, str::FromStr};

use crate::ExpansionError;

/// The symmetry assumed when extending a signal defined on `[0, L]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ExpansionType {
	/// Half-range sine series, odd reflection about `x = 0`.
	#[default]
	Odd,
	/// Half-range cosine series, even reflection about `x = 0`.
	Even,
	/// Quarter-range sine series. No formula is defined for it yet.
	QuarterOdd,
	/// Quarter-range cosine series over a doubled period, reflected about `x = 0` and `x = L`.
	QuarterEven,
}

impl ExpansionType {
	pub const ALL: [Self; 4] = [Self::Odd, Self::Even, Self::QuarterOdd, Self::QuarterEven];

	#[must_use]
	pub const fn tag(&self) -> &'static str {
		match self {
			Self::Odd => "odd",
			Self::Even => "even",
			Self::QuarterOdd => "quarter_odd",
			Self::QuarterEven => "quarter_even",
		}
	}

	/// The error returned by every operation that has no formula for this type.
	pub(crate) fn not_implemented(self) -> ExpansionError {
		ExpansionError::NotImplemented(self.tag().to_owned())
	}
}

impl Display for ExpansionType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(self.tag(), f)
	}
}

impl FromStr for ExpansionType {
	type Err = ExpansionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|t| t.tag() == s)
			.ok_or_else(|| ExpansionError::NotImplemented(s.to_owned()))
	}
}
