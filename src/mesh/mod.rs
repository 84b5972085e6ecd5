//! Implements the mesh data, the predefined outlines, and the mesh generator

mod generator;
mod mesh;
mod outline;
mod sample_meshes;
pub use crate::mesh::generator::*;
pub use crate::mesh::mesh::*;
pub use crate::mesh::outline::*;
pub use crate::mesh::sample_meshes::*;
