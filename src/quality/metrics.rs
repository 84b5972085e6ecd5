use crate::mesh::Mesh;
use crate::shapes::{map_data, TRI_CENTROID};
use crate::StrError;
use russell_lab::math::PI;

/// Holds the per-element quality metric arrays (same order as the cells)
///
/// All vectors have one entry per cell. Angles are in degrees. The Jacobian
/// determinant and the 2-norm condition number of the Jacobian are evaluated
/// at the element centroid.
#[derive(Clone, Debug)]
pub struct QualityMetrics {
    /// Longest over shortest corner edge
    pub aspect_ratios: Vec<f64>,

    /// Equiangular skew in [0, 1] (0 = equilateral)
    pub skewness: Vec<f64>,

    /// Smallest interior angle (degrees)
    pub min_angles: Vec<f64>,

    /// Largest interior angle (degrees)
    pub max_angles: Vec<f64>,

    /// 2-norm condition number of the centroid Jacobian
    pub cond_nums: Vec<f64>,

    /// Determinant of the centroid Jacobian
    pub jac_dets: Vec<f64>,
}

/// Computes the interior angles (degrees) at the three corners of a triangle
fn corner_angles(corners: &[[f64; 2]]) -> [f64; 3] {
    let mut angles = [0.0; 3];
    for m in 0..3 {
        let a = corners[m];
        let b = corners[(m + 1) % 3];
        let c = corners[(m + 2) % 3];
        let (ux, uy) = (b[0] - a[0], b[1] - a[1]);
        let (vx, vy) = (c[0] - a[0], c[1] - a[1]);
        let cos = (ux * vx + uy * vy) / (f64::hypot(ux, uy) * f64::hypot(vx, vy));
        angles[m] = f64::acos(f64::clamp(cos, -1.0, 1.0)) * 180.0 / PI;
    }
    angles
}

/// Computes the 2-norm condition number of a 2x2 matrix from its entries
///
/// The singular values are the square roots of the eigenvalues of JᵀJ,
/// obtained here in closed form.
fn condition_number_2x2(j00: f64, j01: f64, j10: f64, j11: f64) -> Result<f64, StrError> {
    let trace = j00 * j00 + j01 * j01 + j10 * j10 + j11 * j11;
    let det = j00 * j11 - j01 * j10;
    let disc = f64::sqrt(f64::max(trace * trace - 4.0 * det * det, 0.0));
    let lambda_max = (trace + disc) / 2.0;
    let lambda_min = (trace - disc) / 2.0;
    if lambda_min <= 0.0 {
        return Err("cannot compute the condition number of a singular Jacobian");
    }
    Ok(f64::sqrt(lambda_max / lambda_min))
}

impl QualityMetrics {
    /// Analyzes all cells of the mesh
    ///
    /// Returns an error if any cell is degenerate (non-positive or singular
    /// Jacobian at the centroid).
    pub fn analyze(mesh: &Mesh) -> Result<QualityMetrics, StrError> {
        let ncell = mesh.cells.len();
        let mut metrics = QualityMetrics {
            aspect_ratios: Vec::with_capacity(ncell),
            skewness: Vec::with_capacity(ncell),
            min_angles: Vec::with_capacity(ncell),
            max_angles: Vec::with_capacity(ncell),
            cond_nums: Vec::with_capacity(ncell),
            jac_dets: Vec::with_capacity(ncell),
        };
        for cell in &mesh.cells {
            let coords = mesh.cell_coords(cell);

            // edge-length and angle metrics from the corner nodes
            let mut l_min = f64::MAX;
            let mut l_max = 0.0;
            for m in 0..3 {
                let a = coords[m];
                let b = coords[(m + 1) % 3];
                let length = f64::hypot(b[0] - a[0], b[1] - a[1]);
                l_min = f64::min(l_min, length);
                l_max = f64::max(l_max, length);
            }
            if l_min <= 0.0 {
                return Err("cell has a zero-length edge");
            }
            let angles = corner_angles(&coords[..3]);
            let a_min = angles.iter().fold(f64::MAX, |acc, a| f64::min(acc, *a));
            let a_max = angles.iter().fold(0.0, |acc: f64, a| f64::max(acc, *a));

            // mapping metrics at the centroid
            let data = map_data(cell.kind, &coords, TRI_CENTROID)?;
            let cond = condition_number_2x2(
                data.jacobian.get(0, 0),
                data.jacobian.get(0, 1),
                data.jacobian.get(1, 0),
                data.jacobian.get(1, 1),
            )?;

            metrics.aspect_ratios.push(l_max / l_min);
            metrics.skewness.push(f64::max((a_max - 60.0) / 120.0, (60.0 - a_min) / 60.0));
            metrics.min_angles.push(a_min);
            metrics.max_angles.push(a_max);
            metrics.cond_nums.push(cond);
            metrics.jac_dets.push(data.det_jac);
        }
        Ok(metrics)
    }

    /// Returns the number of analyzed cells
    pub fn ncell(&self) -> usize {
        self.jac_dets.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{condition_number_2x2, QualityMetrics};
    use crate::mesh::SampleMeshes;
    use russell_lab::approx_eq;

    #[test]
    fn equilateral_triangle_is_perfect() {
        let mesh = SampleMeshes::one_tri3_equilateral();
        let metrics = QualityMetrics::analyze(&mesh).unwrap();
        assert_eq!(metrics.ncell(), 1);
        approx_eq(metrics.aspect_ratios[0], 1.0, 1e-9);
        approx_eq(metrics.skewness[0], 0.0, 1e-9);
        approx_eq(metrics.min_angles[0], 60.0, 1e-9);
        approx_eq(metrics.max_angles[0], 60.0, 1e-9);
        // the area is √3/4, hence det(J) = √3/2
        approx_eq(metrics.jac_dets[0], f64::sqrt(3.0) / 2.0, 1e-9);
        // the right-triangle reference sees the equilateral shape with cond √3
        approx_eq(metrics.cond_nums[0], f64::sqrt(3.0), 1e-9);
    }

    #[test]
    fn right_triangle_metrics_are_correct() {
        let mesh = SampleMeshes::two_tri3();
        let metrics = QualityMetrics::analyze(&mesh).unwrap();
        assert_eq!(metrics.ncell(), 2);
        for e in 0..2 {
            approx_eq(metrics.aspect_ratios[e], f64::sqrt(2.0), 1e-14);
            approx_eq(metrics.min_angles[e], 45.0, 1e-13);
            approx_eq(metrics.max_angles[e], 90.0, 1e-13);
            approx_eq(metrics.skewness[e], 0.25, 1e-14);
            approx_eq(metrics.jac_dets[e], 1.0, 1e-14);
            // both cells map from the reference right triangle with J = ±I
            approx_eq(metrics.cond_nums[e], 1.0, 1e-13);
        }
    }

    #[test]
    fn tri6_uses_the_corner_geometry() {
        let mesh = SampleMeshes::one_tri6();
        let metrics = QualityMetrics::analyze(&mesh).unwrap();
        approx_eq(metrics.aspect_ratios[0], f64::sqrt(2.0), 1e-14);
        approx_eq(metrics.jac_dets[0], 4.0, 1e-13);
    }

    #[test]
    fn condition_number_works() {
        approx_eq(condition_number_2x2(1.0, 0.0, 0.0, 1.0).unwrap(), 1.0, 1e-15);
        approx_eq(condition_number_2x2(2.0, 0.0, 0.0, 1.0).unwrap(), 2.0, 1e-14);
        assert_eq!(
            condition_number_2x2(1.0, 2.0, 2.0, 4.0).err(),
            Some("cannot compute the condition number of a singular Jacobian")
        );
    }
}
