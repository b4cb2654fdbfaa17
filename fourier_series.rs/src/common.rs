use math_utils::{extrapolation::ExtrapolationError, quadrature::QuadratureError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
	#[error("invalid input: {0}")]
	InvalidInput(String),
	#[error("expansion type '{0}' is not implemented")]
	NotImplemented(String),
}

impl From<QuadratureError> for ExpansionError {
	fn from(value: QuadratureError) -> Self {
		Self::InvalidInput(value.to_string())
	}
}

impl From<ExtrapolationError> for ExpansionError {
	fn from(value: ExtrapolationError) -> Self {
		Self::InvalidInput(value.to_string())
	}
}
