//! FemPrep implements a 2D finite element mesh preprocessing toolkit
//!
//! The library generates triangular meshes for closed polygonal outlines,
//! computes the physical coordinates of Gauss points, evaluates element
//! quality metrics, and interpolates scalar fields (and their gradients)
//! onto the Gauss points. Diagnostic figures are produced with `plotpy`.
//!
//! The `bulldog_demo` binary runs the whole pipeline for the predefined
//! bulldog outline and writes the resulting figures to the current directory.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

/// Defines a scalar field over the 2D plane
pub type FnField = fn(f64, f64) -> f64;

/// Defines the gradient of a scalar field over the 2D plane
pub type FnFieldGrad = fn(f64, f64) -> [f64; 2];

pub mod base;
pub mod integ;
pub mod interp;
pub mod mesh;
pub mod plot;
pub mod prelude;
pub mod quality;
pub mod shapes;
