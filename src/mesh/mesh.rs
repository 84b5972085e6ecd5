use crate::base::ElemKind;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a mesh node with its 2D coordinates
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Point {
    /// Identification number (equals the position in the points vector)
    pub id: usize,

    /// Coordinates (x, y)
    pub coords: [f64; 2],
}

/// Holds an element definition (kind and node indices)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Cell {
    /// Identification number (equals the position in the cells vector)
    pub id: usize,

    /// Element kind
    pub kind: ElemKind,

    /// Node indices (connectivity); corners first, CCW order
    pub points: Vec<usize>,
}

/// Holds the mesh coordinates and connectivity
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Mesh {
    /// All nodes
    pub points: Vec<Point>,

    /// All elements
    pub cells: Vec<Cell>,
}

impl Mesh {
    /// Checks the connectivity: ids, node counts, and point indices
    pub fn check(&self) -> Result<(), StrError> {
        for (i, point) in self.points.iter().enumerate() {
            if point.id != i {
                return Err("point ids must equal their position in the points vector");
            }
        }
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.id != i {
                return Err("cell ids must equal their position in the cells vector");
            }
            if cell.points.len() != cell.kind.nnode() {
                return Err("number of cell points must match the element kind");
            }
            for p in &cell.points {
                if *p >= self.points.len() {
                    return Err("cell point index is out of range");
                }
            }
        }
        Ok(())
    }

    /// Returns the coordinates of a cell's nodes
    pub fn cell_coords(&self, cell: &Cell) -> Vec<[f64; 2]> {
        cell.points.iter().map(|p| self.points[*p].coords).collect()
    }

    /// Writes a JSON file with the mesh data
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }

    /// Reads a JSON file with the mesh data
    pub fn read_json<P>(full_path: &P) -> Result<Mesh, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let mesh = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(mesh)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
