//! Truncated Fourier series of sampled signals defined on `[0, L]`.
//!
//! ```
//! use fourier_series::{ExpansionType, Expander};
//!
//! let expander = Expander::new(1.).unwrap();
//! let signal: Vec<f64> = (0..100).map(|k| f64::from(k) / 100.).collect();
//!
//! let coefficients = expander
//! 	.coefficients(&signal, ExpansionType::Even, 20)
//! 	.unwrap();
//! let reconstruction = expander
//! 	.reconstruct_set(&coefficients, ExpansionType::Even, signal.len())
//! 	.unwrap();
//! assert!((reconstruction[50] - 0.5).abs() < 0.01);
//! ```

mod common;
pub use common::*;

mod expansion_type;
pub use expansion_type::*;

mod coefficient_set;
pub use coefficient_set::*;

mod expander;
pub use expander::{Expander, DEFAULT_MAXIMUM_N, MIN_SIGNAL_LENGTH};

mod extension;
pub use extension::*;
