pub mod extrapolation;
pub mod parity;
pub mod quadrature;
pub mod uniform_grid;
