//! Implements the base structures for the mesh preprocessing toolkit

mod auxiliary;
mod constants;
mod enums;
pub use crate::base::auxiliary::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
