use super::{shape_derivs, shape_fns};
use crate::base::ElemKind;
use crate::StrError;
use russell_lab::{mat_inverse, Matrix};

/// Holds the isoparametric mapping data at a natural point of an element
pub struct MapData {
    /// Jacobian matrix (2 x 2) of the reference-to-physical map
    ///
    /// ```text
    /// J = ┌ dx/dξ  dy/dξ ┐
    ///     └ dx/dη  dy/dη ┘
    /// ```
    pub jacobian: Matrix,

    /// Determinant of the Jacobian (positive for CCW elements)
    pub det_jac: f64,

    /// Shape function gradients with respect to physical coordinates (nnode rows)
    pub gradients: Vec<[f64; 2]>,
}

/// Maps area coordinates to the physical coordinates of an element
///
/// x(L) = Σm Nm(L) xm, using the coordinates of the element's nodes.
pub fn map_coords(kind: ElemKind, coords: &[[f64; 2]], l: [f64; 3]) -> [f64; 2] {
    let nn = shape_fns(kind, l);
    let mut x = [0.0, 0.0];
    for (m, n) in nn.iter().enumerate() {
        x[0] += n * coords[m][0];
        x[1] += n * coords[m][1];
    }
    x
}

/// Computes the isoparametric mapping data of an element at area coordinates
///
/// Returns an error if the element has fewer coordinates than nodes or if the
/// Jacobian determinant is not positive (degenerate or inverted element).
pub fn map_data(kind: ElemKind, coords: &[[f64; 2]], l: [f64; 3]) -> Result<MapData, StrError> {
    let nnode = kind.nnode();
    if coords.len() != nnode {
        return Err("number of coordinates must match the element kind");
    }
    let derivs = shape_derivs(kind, l);
    let (mut j00, mut j01, mut j10, mut j11) = (0.0, 0.0, 0.0, 0.0);
    for m in 0..nnode {
        j00 += derivs[m][0] * coords[m][0];
        j01 += derivs[m][0] * coords[m][1];
        j10 += derivs[m][1] * coords[m][0];
        j11 += derivs[m][1] * coords[m][1];
    }
    let mut jj = Matrix::new(2, 2);
    jj.set(0, 0, j00);
    jj.set(0, 1, j01);
    jj.set(1, 0, j10);
    jj.set(1, 1, j11);
    let mut jj_inv = Matrix::new(2, 2);
    let det_jac = mat_inverse(&mut jj_inv, &jj)?;
    if det_jac <= 0.0 {
        return Err("element has a non-positive Jacobian determinant");
    }
    let mut gradients = vec![[0.0; 2]; nnode];
    for m in 0..nnode {
        gradients[m][0] = jj_inv.get(0, 0) * derivs[m][0] + jj_inv.get(0, 1) * derivs[m][1];
        gradients[m][1] = jj_inv.get(1, 0) * derivs[m][0] + jj_inv.get(1, 1) * derivs[m][1];
    }
    Ok(MapData {
        jacobian: jj,
        det_jac,
        gradients,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
