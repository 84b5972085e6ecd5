//! Implements the extraction of Gauss point locations over whole meshes

mod gauss_points;
pub use crate::integ::gauss_points::*;
