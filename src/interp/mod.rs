//! Implements the interpolation of scalar fields onto Gauss points

mod gradient;
mod sample_field;
mod scalar;
pub use crate::interp::gradient::*;
pub use crate::interp::sample_field::*;
pub use crate::interp::scalar::*;
