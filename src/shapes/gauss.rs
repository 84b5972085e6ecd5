use crate::StrError;

/// Holds a quadrature point in area (barycentric) coordinates
#[derive(Clone, Copy, Debug)]
pub struct GaussPoint {
    /// Area coordinates (L1, L2, L3) with L1 + L2 + L3 = 1
    pub coords: [f64; 3],

    /// Integration weight scaled for the unit triangle (weights sum to 1/2)
    pub weight: f64,
}

/// Area coordinates of the triangle centroid
pub const TRI_CENTROID: [f64; 3] = [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0];

/// Returns the triangle Gauss rule with the requested number of points
///
/// The available rules are:
///
/// * `n_gauss = 1` -- centroid rule, exact for linear polynomials
/// * `n_gauss = 3` -- edge-midpoint rule, exact for quadratic polynomials
/// * `n_gauss = 4` -- centroid plus three interior points, exact for cubics
///
/// Any other count is rejected with an error.
pub fn gauss_tri(n_gauss: usize) -> Result<Vec<GaussPoint>, StrError> {
    match n_gauss {
        1 => Ok(vec![GaussPoint {
            coords: TRI_CENTROID,
            weight: 0.5,
        }]),
        3 => {
            let w = 1.0 / 6.0;
            Ok(vec![
                GaussPoint { coords: [0.5, 0.5, 0.0], weight: w },
                GaussPoint { coords: [0.0, 0.5, 0.5], weight: w },
                GaussPoint { coords: [0.5, 0.0, 0.5], weight: w },
            ])
        }
        4 => {
            let w_center = -27.0 / 96.0;
            let w_corner = 25.0 / 96.0;
            Ok(vec![
                GaussPoint { coords: TRI_CENTROID, weight: w_center },
                GaussPoint { coords: [0.6, 0.2, 0.2], weight: w_corner },
                GaussPoint { coords: [0.2, 0.6, 0.2], weight: w_corner },
                GaussPoint { coords: [0.2, 0.2, 0.6], weight: w_corner },
            ])
        }
        _ => Err("number of Gauss points must be 1, 3, or 4"),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::gauss_tri;
    use russell_lab::approx_eq;

    #[test]
    fn weights_sum_to_the_unit_triangle_area() {
        for n_gauss in [1, 3, 4] {
            let rule = gauss_tri(n_gauss).unwrap();
            assert_eq!(rule.len(), n_gauss);
            let sum: f64 = rule.iter().map(|p| p.weight).sum();
            approx_eq(sum, 0.5, 1e-15);
        }
    }

    #[test]
    fn area_coordinates_sum_to_one() {
        for n_gauss in [1, 3, 4] {
            let rule = gauss_tri(n_gauss).unwrap();
            for p in &rule {
                let sum: f64 = p.coords.iter().sum();
                approx_eq(sum, 1.0, 1e-15);
            }
        }
    }

    #[test]
    fn rule_integrates_quadratics() {
        // ∫∫ L2² dA over the unit triangle = 1/12
        let rule = gauss_tri(3).unwrap();
        let integral: f64 = rule.iter().map(|p| p.weight * p.coords[1] * p.coords[1]).sum();
        approx_eq(integral, 1.0 / 12.0, 1e-15);
    }

    #[test]
    fn invalid_counts_are_rejected() {
        for n_gauss in [0, 2, 5, 7] {
            assert_eq!(
                gauss_tri(n_gauss).err(),
                Some("number of Gauss points must be 1, 3, or 4")
            );
        }
    }
}
