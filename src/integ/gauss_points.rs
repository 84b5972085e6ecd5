use crate::mesh::Mesh;
use crate::shapes::{gauss_tri, map_coords};
use crate::StrError;

/// Holds the physical coordinates of all Gauss points of a mesh
///
/// The indexing is `[cell][gauss_point][dim]` with the cells in the same
/// order as the mesh connectivity. This structure makes the shape and
/// ordering conventions explicit instead of relying on anonymous arrays.
#[derive(Clone, Debug)]
pub struct MeshGaussPoints {
    /// Physical coordinates, cell-major
    pub coords: Vec<Vec<[f64; 2]>>,
}

impl MeshGaussPoints {
    /// Computes the Gauss point locations of every cell of the mesh
    ///
    /// The number of Gauss points must be one of {1, 3, 4}.
    pub fn new(mesh: &Mesh, num_gauss: usize) -> Result<MeshGaussPoints, StrError> {
        let rule = gauss_tri(num_gauss)?;
        let mut coords = Vec::with_capacity(mesh.cells.len());
        for cell in &mesh.cells {
            let cc = mesh.cell_coords(cell);
            let points = rule.iter().map(|p| map_coords(cell.kind, &cc, p.coords)).collect();
            coords.push(points);
        }
        Ok(MeshGaussPoints { coords })
    }

    /// Returns the number of cells
    pub fn ncell(&self) -> usize {
        self.coords.len()
    }

    /// Returns the number of Gauss points per cell
    pub fn ngauss(&self) -> usize {
        if self.coords.is_empty() {
            0
        } else {
            self.coords[0].len()
        }
    }

    /// Returns all coordinates flattened into (x, y) arrays for plotting
    pub fn flattened(&self) -> (Vec<f64>, Vec<f64>) {
        let n = self.ncell() * self.ngauss();
        let mut xx = Vec::with_capacity(n);
        let mut yy = Vec::with_capacity(n);
        for cell in &self.coords {
            for p in cell {
                xx.push(p[0]);
                yy.push(p[1]);
            }
        }
        (xx, yy)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MeshGaussPoints;
    use crate::mesh::SampleMeshes;
    use russell_lab::{approx_eq, vec_approx_eq};

    #[test]
    fn invalid_gauss_counts_are_rejected() {
        let mesh = SampleMeshes::two_tri3();
        assert_eq!(
            MeshGaussPoints::new(&mesh, 2).err(),
            Some("number of Gauss points must be 1, 3, or 4")
        );
    }

    #[test]
    fn centroid_rule_works() {
        let mesh = SampleMeshes::two_tri3();
        let gauss = MeshGaussPoints::new(&mesh, 1).unwrap();
        assert_eq!(gauss.ncell(), 2);
        assert_eq!(gauss.ngauss(), 1);
        // centroid of the first triangle (0,0)-(1,0)-(0,1)
        vec_approx_eq(&gauss.coords[0][0], &[1.0 / 3.0, 1.0 / 3.0], 1e-15);
        // centroid of the second triangle (1,1)-(0,1)-(1,0)
        vec_approx_eq(&gauss.coords[1][0], &[2.0 / 3.0, 2.0 / 3.0], 1e-15);
    }

    #[test]
    fn three_point_rule_lands_on_edge_midpoints() {
        let mesh = SampleMeshes::two_tri3();
        let gauss = MeshGaussPoints::new(&mesh, 3).unwrap();
        assert_eq!(gauss.ngauss(), 3);
        // first point has (L1, L2, L3) = (0.5, 0.5, 0): midpoint of edge 0-1
        vec_approx_eq(&gauss.coords[0][0], &[0.5, 0.0], 1e-15);
        // second point: midpoint of edge 1-2
        vec_approx_eq(&gauss.coords[0][1], &[0.5, 0.5], 1e-15);
        // third point: midpoint of edge 2-0
        vec_approx_eq(&gauss.coords[0][2], &[0.0, 0.5], 1e-15);
    }

    #[test]
    fn tri6_matches_tri3_for_straight_edges() {
        // straight-edged Tri6 has the same (affine) map as Tri3
        let tri6 = SampleMeshes::one_tri6();
        let gauss = MeshGaussPoints::new(&tri6, 4).unwrap();
        assert_eq!(gauss.ncell(), 1);
        assert_eq!(gauss.ngauss(), 4);
        vec_approx_eq(&gauss.coords[0][0], &[2.0 / 3.0, 2.0 / 3.0], 1e-14);
    }

    #[test]
    fn flattened_works() {
        let mesh = SampleMeshes::two_tri3();
        let gauss = MeshGaussPoints::new(&mesh, 3).unwrap();
        let (xx, yy) = gauss.flattened();
        assert_eq!(xx.len(), 6);
        assert_eq!(yy.len(), 6);
        approx_eq(xx[0], 0.5, 1e-15);
        approx_eq(yy[0], 0.0, 1e-15);
    }
}
