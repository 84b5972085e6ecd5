use super::ElemKind;

/// Derives the mesh name from the element kind and the number of Gauss points
///
/// The name is deterministic and distinct for every (kind, num_gauss) pair;
/// it prefixes all output files written by the demo driver.
///
/// ```
/// use femprep::base::{mesh_name, ElemKind};
/// assert_eq!(mesh_name(ElemKind::Tri3, 3), "bulldog_mesh_D2_nn3_tri_gp3");
/// ```
pub fn mesh_name(kind: ElemKind, num_gauss: usize) -> String {
    format!("bulldog_mesh_{}_gp{}", kind.to_str(), num_gauss)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::mesh_name;
    use crate::base::ElemKind;
    use std::collections::HashSet;

    #[test]
    fn mesh_name_works() {
        assert_eq!(mesh_name(ElemKind::Tri3, 1), "bulldog_mesh_D2_nn3_tri_gp1");
        assert_eq!(mesh_name(ElemKind::Tri3, 3), "bulldog_mesh_D2_nn3_tri_gp3");
        assert_eq!(mesh_name(ElemKind::Tri6, 4), "bulldog_mesh_D2_nn6_tri_gp4");
    }

    #[test]
    fn mesh_name_is_deterministic_and_injective() {
        let mut names = HashSet::new();
        for kind in [ElemKind::Tri3, ElemKind::Tri6] {
            for num_gauss in [1, 3, 4] {
                let first = mesh_name(kind, num_gauss);
                let second = mesh_name(kind, num_gauss);
                assert_eq!(first, second);
                assert!(names.insert(first));
            }
        }
        assert_eq!(names.len(), 6);
    }
}
