//! Implements the diagnostic figures (mesh, quality histograms, errors)

mod interp_plot;
mod mesh_plot;
mod quality_plot;
pub use crate::plot::interp_plot::*;
pub use crate::plot::mesh_plot::*;
pub use crate::plot::quality_plot::*;
