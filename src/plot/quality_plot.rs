use crate::quality::QualityMetrics;
use crate::StrError;
use plotpy::{Histogram, Plot, SuperTitleParams};
use std::ffi::OsStr;

/// Saves the six-panel histogram figure with the quality metrics
///
/// The panels show, in order: condition number, Jacobian determinant,
/// aspect ratio, skewness, and the min/max interior angles.
pub fn plot_quality_histograms<P>(metrics: &QualityMetrics, super_title: &str, full_path: &P) -> Result<(), StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let panels: [(&str, &Vec<f64>); 6] = [
        ("condition number", &metrics.cond_nums),
        ("Jacobian determinant", &metrics.jac_dets),
        ("aspect ratio", &metrics.aspect_ratios),
        ("skewness", &metrics.skewness),
        ("min angle [deg]", &metrics.min_angles),
        ("max angle [deg]", &metrics.max_angles),
    ];

    let mut plot = Plot::new();
    plot.set_gridspec("grid", 2, 3, "wspace=0.35,hspace=0.35");
    for (index, (label, data)) in panels.iter().enumerate() {
        let row = format!("{}", index / 3);
        let col = format!("{}", index % 3);
        plot.set_subplot_grid("grid", row.as_str(), col.as_str());
        let mut histogram = Histogram::new();
        histogram.set_number_bins(12).set_colors(&["#1862ab"]);
        histogram.draw(&vec![(*data).clone()], &[*label]);
        plot.add(&histogram);
        plot.grid_and_labels(label, "count");
    }

    let mut params = SuperTitleParams::new();
    params.set_y(0.98);
    plot.set_super_title(super_title, Some(params));
    plot.set_figure_size_points(1000.0, 600.0);
    plot.save(full_path)
}
