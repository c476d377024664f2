/*!
 * Linear Regression
 * Closed-form ordinary least squares over a memory time series
 */

/// Slope and coefficient of determination of `ys` over `xs`.
///
/// Degenerate inputs degrade to zeros instead of erroring: mismatched or
/// short series yield (0, 0), zero x-spread yields slope 0, and zero
/// y-spread yields r-squared 0.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    if xs.len() != ys.len() || xs.len() < 2 {
        return (0.0, 0.0);
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        numerator += (x - x_mean) * (y - y_mean);
        denominator += (x - x_mean) * (x - x_mean);
    }
    if denominator == 0.0 {
        return (0.0, 0.0);
    }
    let slope = numerator / denominator;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let predicted = slope * (x - x_mean) + y_mean;
        ss_res += (y - predicted) * (y - predicted);
        ss_tot += (y - y_mean) * (y - y_mean);
    }
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    };

    (slope, r_squared)
}
