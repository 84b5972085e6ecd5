/// Smooth scalar test field: sin(x/10) cos(y/10)
///
/// The field is cheap to evaluate and doubly differentiable everywhere,
/// which makes it a convenient ground truth for interpolation checks.
pub fn wave_field(x: f64, y: f64) -> f64 {
    f64::sin(x / 10.0) * f64::cos(y / 10.0)
}

/// Exact gradient of [wave_field]
///
/// The constants must match [wave_field] exactly; otherwise the error
/// comparisons of the demo are meaningless.
pub fn wave_field_grad(x: f64, y: f64) -> [f64; 2] {
    [
        f64::cos(x / 10.0) * f64::cos(y / 10.0) / 10.0,
        -f64::sin(x / 10.0) * f64::sin(y / 10.0) / 10.0,
    ]
}

/// Evaluates [wave_field] over paired coordinate slices
///
/// The output has the same length as the input slices.
pub fn wave_field_many(xx: &[f64], yy: &[f64]) -> Vec<f64> {
    xx.iter().zip(yy.iter()).map(|(x, y)| wave_field(*x, *y)).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
