use super::{Cell, Mesh, Point};
use crate::base::ElemKind;

/// Holds small hand-built meshes for tests and documentation
pub struct SampleMeshes {}

impl SampleMeshes {
    /// Returns a mesh of the unit square with two Tri3 cells
    #[rustfmt::skip]
    pub fn two_tri3() -> Mesh {
        //      y
        //      ^
        // 1.0  3------------2
        //      |`.      [1] |    [#] indicates id
        //      |  `.        |
        //      |    `.      |
        //      |      `.    |
        //      | [0]    `.  |
        //      |          `.|
        // 0.0  0------------1 -> x
        //     0.0          1.0
        Mesh {
            points: vec![
                Point { id: 0, coords: [0.0, 0.0] },
                Point { id: 1, coords: [1.0, 0.0] },
                Point { id: 2, coords: [1.0, 1.0] },
                Point { id: 3, coords: [0.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, kind: ElemKind::Tri3, points: vec![0, 1, 3] },
                Cell { id: 1, kind: ElemKind::Tri3, points: vec![2, 3, 1] },
            ],
        }
    }

    /// Returns a single Tri6 cell over the right triangle with legs of length 2
    #[rustfmt::skip]
    pub fn one_tri6() -> Mesh {
        //      y
        //      ^
        // 2.0  2
        //      | `.
        // 1.0  5    4
        //      |      `.
        // 0.0  0----3----1 -> x
        //     0.0  1.0  2.0
        Mesh {
            points: vec![
                Point { id: 0, coords: [0.0, 0.0] },
                Point { id: 1, coords: [2.0, 0.0] },
                Point { id: 2, coords: [0.0, 2.0] },
                Point { id: 3, coords: [1.0, 0.0] },
                Point { id: 4, coords: [1.0, 1.0] },
                Point { id: 5, coords: [0.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, kind: ElemKind::Tri6, points: vec![0, 1, 2, 3, 4, 5] },
            ],
        }
    }

    /// Returns a single equilateral Tri3 cell with unit edges
    #[rustfmt::skip]
    pub fn one_tri3_equilateral() -> Mesh {
        Mesh {
            points: vec![
                Point { id: 0, coords: [0.0, 0.0] },
                Point { id: 1, coords: [1.0, 0.0] },
                Point { id: 2, coords: [0.5, 0.866025403784438647] },
            ],
            cells: vec![
                Cell { id: 0, kind: ElemKind::Tri3, points: vec![0, 1, 2] },
            ],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
