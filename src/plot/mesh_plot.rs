use crate::integ::MeshGaussPoints;
use crate::mesh::Mesh;
use crate::StrError;
use plotpy::{Canvas, Curve, Plot};
use std::ffi::OsStr;

/// Draws the mesh with the Gauss points overlaid and saves the figure
///
/// The element edges are drawn from the corner nodes; the Gauss points are
/// rendered as markers. The figure is saved to `full_path` (the extension
/// selects the image format, e.g. `.png`).
pub fn plot_mesh_with_gauss_points<P>(
    mesh: &Mesh,
    gauss: &MeshGaussPoints,
    title: &str,
    full_path: &P,
) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let mut edges = Canvas::new();
    edges.set_face_color("None").set_edge_color("#6b6b6b");
    for cell in &mesh.cells {
        let coords = mesh.cell_coords(cell);
        let corners: Vec<Vec<f64>> = coords[..3].iter().map(|x| x.to_vec()).collect();
        edges.draw_polyline(&corners, true);
    }

    let (xx, yy) = gauss.flattened();
    let mut markers = Curve::new();
    markers
        .set_line_style("None")
        .set_marker_style("o")
        .set_marker_size(2.5)
        .set_marker_color("#cd0000")
        .set_marker_line_color("#cd0000");
    markers.draw(&xx, &yy);

    let mut plot = Plot::new();
    plot.add(&edges)
        .add(&markers)
        .set_equal_axes(true)
        .set_title(title)
        .grid_and_labels("x", "y");
    plot.save(full_path)
}
