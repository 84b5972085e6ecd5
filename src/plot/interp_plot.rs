use crate::interp::{GradField, ScalarField};
use crate::StrError;
use plotpy::{Curve, Plot};
use std::ffi::OsStr;

/// Draws an interpolated-versus-analytical overlay into the current subplot
fn draw_overlay(plot: &mut Plot, index: &[f64], interp: &[f64], truth: &[f64], y_label: &str) {
    let mut curve_truth = Curve::new();
    curve_truth
        .set_line_style("None")
        .set_marker_style("+")
        .set_marker_size(5.0)
        .set_label("analytical");
    curve_truth.draw(&index.to_vec(), &truth.to_vec());

    let mut curve_interp = Curve::new();
    curve_interp
        .set_line_style("None")
        .set_marker_style(".")
        .set_marker_size(3.0)
        .set_label("interpolated");
    curve_interp.draw(&index.to_vec(), &interp.to_vec());

    plot.add(&curve_truth).add(&curve_interp);
    plot.grid_labels_legend("Gauss point index", y_label);
}

/// Draws the pointwise absolute error into the current subplot
fn draw_error(plot: &mut Plot, index: &[f64], interp: &[f64], truth: &[f64]) {
    let error: Vec<f64> = interp.iter().zip(truth.iter()).map(|(a, b)| f64::abs(a - b)).collect();
    let mut curve = Curve::new();
    curve
        .set_line_style("None")
        .set_marker_style(".")
        .set_marker_size(3.0)
        .set_marker_color("#cd0000")
        .set_marker_line_color("#cd0000");
    curve.draw(&index.to_vec(), &error);
    plot.add(&curve);
    plot.grid_and_labels("Gauss point index", "absolute error");
}

fn index_array(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Saves the scalar interpolation figure (overlay plus pointwise error)
pub fn plot_interpolation_with_error<P>(
    interp: &ScalarField,
    truth: &ScalarField,
    title: &str,
    full_path: &P,
) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let vv_interp = interp.flattened();
    let vv_truth = truth.flattened();
    if vv_interp.len() != vv_truth.len() {
        return Err("interpolated and analytical fields must have the same size");
    }
    let index = index_array(vv_interp.len());

    let mut plot = Plot::new();
    plot.set_gridspec("grid", 2, 1, "hspace=0.35");
    plot.set_subplot_grid("grid", "0", "0");
    draw_overlay(&mut plot, &index, &vv_interp, &vv_truth, "field value");
    plot.set_subplot_grid("grid", "1", "0");
    draw_error(&mut plot, &index, &vv_interp, &vv_truth);
    plot.set_title(title);
    plot.set_figure_size_points(800.0, 500.0);
    plot.save(full_path)
}

/// Saves the gradient interpolation figure (one column per component)
pub fn plot_gradient_with_error<P>(
    interp: &GradField,
    truth: &GradField,
    title: &str,
    full_path: &P,
) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let n = truth.flattened(0).len();
    if interp.flattened(0).len() != n {
        return Err("interpolated and analytical gradients must have the same size");
    }
    let index = index_array(n);

    let mut plot = Plot::new();
    plot.set_gridspec("grid", 2, 2, "wspace=0.3,hspace=0.35");
    for dim in 0..2 {
        let vv_interp = interp.flattened(dim);
        let vv_truth = truth.flattened(dim);
        let y_label = if dim == 0 { "df/dx" } else { "df/dy" };
        let col = format!("{}", dim);
        plot.set_subplot_grid("grid", "0", col.as_str());
        draw_overlay(&mut plot, &index, &vv_interp, &vv_truth, y_label);
        plot.set_subplot_grid("grid", "1", col.as_str());
        draw_error(&mut plot, &index, &vv_interp, &vv_truth);
    }
    plot.set_title(title);
    plot.set_figure_size_points(900.0, 550.0);
    plot.save(full_path)
}
