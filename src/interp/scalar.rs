use crate::integ::MeshGaussPoints;
use crate::mesh::Mesh;
use crate::shapes::{gauss_tri, shape_fns};
use crate::{FnField, StrError};

/// Holds scalar values at the Gauss points of a mesh
///
/// The indexing is `[cell][gauss_point]`, matching [MeshGaussPoints].
#[derive(Clone, Debug)]
pub struct ScalarField {
    /// Values, cell-major
    pub values: Vec<Vec<f64>>,
}

impl ScalarField {
    /// Evaluates a field directly at the Gauss point locations
    ///
    /// This yields the ground truth against which shape-function
    /// interpolation is compared.
    pub fn eval_at(gauss: &MeshGaussPoints, field: FnField) -> ScalarField {
        let values = gauss
            .coords
            .iter()
            .map(|cell| cell.iter().map(|x| field(x[0], x[1])).collect())
            .collect();
        ScalarField { values }
    }

    /// Returns all values flattened into a single array (cell-major)
    pub fn flattened(&self) -> Vec<f64> {
        self.values.iter().flatten().copied().collect()
    }
}

/// Interpolates a scalar field onto the Gauss points of every cell
///
/// The field is sampled at the nodes and carried to the Gauss points by the
/// element shape functions: value(gp) = Σm Nm(ξgp) f(xm).
pub fn scalar_at_gauss_points(mesh: &Mesh, num_gauss: usize, field: FnField) -> Result<ScalarField, StrError> {
    let rule = gauss_tri(num_gauss)?;
    let mut values = Vec::with_capacity(mesh.cells.len());
    for cell in &mesh.cells {
        let coords = mesh.cell_coords(cell);
        let nodal: Vec<f64> = coords.iter().map(|x| field(x[0], x[1])).collect();
        let mut at_gauss = Vec::with_capacity(rule.len());
        for p in &rule {
            let nn = shape_fns(cell.kind, p.coords);
            let value: f64 = nn.iter().zip(nodal.iter()).map(|(n, f)| n * f).sum();
            at_gauss.push(value);
        }
        values.push(at_gauss);
    }
    Ok(ScalarField { values })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
