//! Implements the reference triangles: quadrature rules, shape functions,
//! and the isoparametric mapping to physical coordinates

mod gauss;
mod isomap;
mod tri3;
mod tri6;
pub use crate::shapes::gauss::*;
pub use crate::shapes::isomap::*;

use crate::base::ElemKind;

/// Evaluates the shape functions at the given area coordinates
///
/// The output has length `kind.nnode()` and follows the standard numbering:
/// corners first, then (for Tri6) the mid-edge nodes of edges 0-1, 1-2, 2-0.
pub fn shape_fns(kind: ElemKind, l: [f64; 3]) -> Vec<f64> {
    match kind {
        ElemKind::Tri3 => tri3::shape_fns(l).to_vec(),
        ElemKind::Tri6 => tri6::shape_fns(l).to_vec(),
    }
}

/// Evaluates the shape function derivatives with respect to (ξ, η)
///
/// The natural coordinates relate to the area coordinates through
/// L1 = 1 - ξ - η, L2 = ξ, L3 = η. The output has length `kind.nnode()`.
pub fn shape_derivs(kind: ElemKind, l: [f64; 3]) -> Vec<[f64; 2]> {
    match kind {
        ElemKind::Tri3 => tri3::shape_derivs(l).to_vec(),
        ElemKind::Tri6 => tri6::shape_derivs(l).to_vec(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{shape_derivs, shape_fns};
    use crate::base::ElemKind;
    use russell_lab::approx_eq;

    #[test]
    fn shape_fns_are_a_partition_of_unity() {
        let samples = [
            [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
            [0.5, 0.5, 0.0],
            [0.25, 0.25, 0.5],
            [1.0, 0.0, 0.0],
            [0.1, 0.6, 0.3],
        ];
        for kind in [ElemKind::Tri3, ElemKind::Tri6] {
            for l in &samples {
                let nn = shape_fns(kind, *l);
                assert_eq!(nn.len(), kind.nnode());
                let sum: f64 = nn.iter().sum();
                approx_eq(sum, 1.0, 1e-14);
            }
        }
    }

    #[test]
    fn shape_derivs_sum_to_zero() {
        // the partition of unity implies Σ dNi/dξ = Σ dNi/dη = 0
        let samples = [
            [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
            [0.2, 0.2, 0.6],
            [0.7, 0.1, 0.2],
        ];
        for kind in [ElemKind::Tri3, ElemKind::Tri6] {
            for l in &samples {
                let dd = shape_derivs(kind, *l);
                assert_eq!(dd.len(), kind.nnode());
                let sum_xi: f64 = dd.iter().map(|d| d[0]).sum();
                let sum_eta: f64 = dd.iter().map(|d| d[1]).sum();
                approx_eq(sum_xi, 0.0, 1e-14);
                approx_eq(sum_eta, 0.0, 1e-14);
            }
        }
    }
}
