use crate::integ::MeshGaussPoints;
use crate::mesh::Mesh;
use crate::shapes::{gauss_tri, map_data};
use crate::{FnField, FnFieldGrad, StrError};

/// Holds gradient vectors at the Gauss points of a mesh
///
/// The indexing is `[cell][gauss_point][dim]`, matching [MeshGaussPoints].
#[derive(Clone, Debug)]
pub struct GradField {
    /// Gradients, cell-major
    pub values: Vec<Vec<[f64; 2]>>,
}

impl GradField {
    /// Evaluates an analytic gradient directly at the Gauss point locations
    pub fn eval_at(gauss: &MeshGaussPoints, grad: FnFieldGrad) -> GradField {
        let values = gauss
            .coords
            .iter()
            .map(|cell| cell.iter().map(|x| grad(x[0], x[1])).collect())
            .collect();
        GradField { values }
    }

    /// Returns one gradient component flattened into a single array (cell-major)
    pub fn flattened(&self, dim: usize) -> Vec<f64> {
        self.values.iter().flatten().map(|g| g[dim]).collect()
    }
}

/// Interpolates the gradient of a scalar field onto the Gauss points
///
/// The field is sampled at the nodes and differentiated through the shape
/// functions: ∇(gp) = Σm ∇Nm(ξgp) f(xm), with the physical gradients ∇Nm
/// obtained from the inverse Jacobian of the isoparametric map.
pub fn gradient_at_gauss_points(mesh: &Mesh, num_gauss: usize, field: FnField) -> Result<GradField, StrError> {
    let rule = gauss_tri(num_gauss)?;
    let mut values = Vec::with_capacity(mesh.cells.len());
    for cell in &mesh.cells {
        let coords = mesh.cell_coords(cell);
        let nodal: Vec<f64> = coords.iter().map(|x| field(x[0], x[1])).collect();
        let mut at_gauss = Vec::with_capacity(rule.len());
        for p in &rule {
            let data = map_data(cell.kind, &coords, p.coords)?;
            let mut grad = [0.0, 0.0];
            for (m, f) in nodal.iter().enumerate() {
                grad[0] += data.gradients[m][0] * f;
                grad[1] += data.gradients[m][1] * f;
            }
            at_gauss.push(grad);
        }
        values.push(at_gauss);
    }
    Ok(GradField { values })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
