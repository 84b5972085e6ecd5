use femprep::prelude::*;
use femprep::StrError;

/// Runs the mesh preprocessing pipeline for the bulldog outline
///
/// The six stages are: configuration, mesh generation, Gauss point
/// extraction, quality analysis, scalar interpolation, and gradient
/// interpolation. All figures are written to the current directory.
fn main() -> Result<(), StrError> {
    // configuration
    let kind = ElemKind::Tri3; // or ElemKind::Tri6
    let num_gauss = 3; // 1, 3, or 4
    let target_size = 10.0;

    println!("Element type: {}", kind.to_str());
    println!("Number of Gauss Points: {}", num_gauss);

    // mesh generation
    let name = mesh_name(kind, num_gauss);
    let outline = bulldog_outline();
    let mesh = mesh_outline(&outline, kind, target_size)?;
    println!("Mesh: {} points, {} cells", mesh.points.len(), mesh.cells.len());
    mesh.write_json(&format!("{}.json", name))?;

    // Gauss point extraction and mesh figure
    let gauss = MeshGaussPoints::new(&mesh, num_gauss)?;
    plot_mesh_with_gauss_points(
        &mesh,
        &gauss,
        "Mesh with Gauss Points",
        &format!("{}_with_gauss_points.png", name),
    )?;

    // quality analysis and histograms
    let metrics = QualityMetrics::analyze(&mesh)?;
    plot_quality_histograms(
        &metrics,
        &format!("Mesh Quality Metrics ({})", kind.to_str()),
        &format!("{}_histograms.png", name),
    )?;

    // scalar interpolation versus ground truth
    let truth = ScalarField::eval_at(&gauss, wave_field);
    let interp = scalar_at_gauss_points(&mesh, num_gauss, wave_field)?;
    plot_interpolation_with_error(
        &interp,
        &truth,
        "Scalar Interpolation",
        &format!("{}_fcn_errors.png", name),
    )?;

    // gradient interpolation versus ground truth
    let truth_grad = GradField::eval_at(&gauss, wave_field_grad);
    let interp_grad = gradient_at_gauss_points(&mesh, num_gauss, wave_field)?;
    plot_gradient_with_error(
        &interp_grad,
        &truth_grad,
        "Gradient Interpolation",
        &format!("{}_fcn_grad_errors.png", name),
    )?;

    println!("All tasks completed. Check the generated image files for visualizations.");
    Ok(())
}
