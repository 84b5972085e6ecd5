//! Quadratic triangle (3 corner nodes and 3 mid-edge nodes)
//!
//! ```text
//!       2
//!      / \
//!     5   4
//!    /     \
//!   0---3---1
//! ```
//!
//! Shape functions in area coordinates:
//!
//! ```text
//! N0 = L1 (2 L1 - 1)    N3 = 4 L1 L2
//! N1 = L2 (2 L2 - 1)    N4 = 4 L2 L3
//! N2 = L3 (2 L3 - 1)    N5 = 4 L3 L1
//! ```

/// Evaluates the Tri6 shape functions at area coordinates
pub(super) fn shape_fns(l: [f64; 3]) -> [f64; 6] {
    let (l1, l2, l3) = (l[0], l[1], l[2]);
    [
        l1 * (2.0 * l1 - 1.0),
        l2 * (2.0 * l2 - 1.0),
        l3 * (2.0 * l3 - 1.0),
        4.0 * l1 * l2,
        4.0 * l2 * l3,
        4.0 * l3 * l1,
    ]
}

/// Evaluates the Tri6 derivatives with respect to (ξ, η)
///
/// With L1 = 1 - ξ - η, L2 = ξ, L3 = η, the chain rule gives
/// dN/dξ = dN/dL2 - dN/dL1 and dN/dη = dN/dL3 - dN/dL1.
pub(super) fn shape_derivs(l: [f64; 3]) -> [[f64; 2]; 6] {
    let (l1, l2, l3) = (l[0], l[1], l[2]);
    [
        [1.0 - 4.0 * l1, 1.0 - 4.0 * l1],
        [4.0 * l2 - 1.0, 0.0],
        [0.0, 4.0 * l3 - 1.0],
        [4.0 * (l1 - l2), -4.0 * l2],
        [4.0 * l3, 4.0 * l2],
        [-4.0 * l3, 4.0 * (l1 - l3)],
    ]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
