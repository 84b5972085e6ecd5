//! Makes available common structures needed to run the preprocessing pipeline
//!
//! You may write `use femprep::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{mesh_name, ElemKind, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::integ::MeshGaussPoints;
pub use crate::interp::{
    gradient_at_gauss_points, scalar_at_gauss_points, wave_field, wave_field_grad, GradField, ScalarField,
};
pub use crate::mesh::{bulldog_outline, mesh_outline, Mesh, Outline, SampleMeshes};
pub use crate::plot::{
    plot_gradient_with_error, plot_interpolation_with_error, plot_mesh_with_gauss_points, plot_quality_histograms,
};
pub use crate::quality::QualityMetrics;
