//! Monotone Cubic Interpolation
//!
//! This module implements Fritsch-Carlson monotone cubic interpolation used
//! to draw a smooth trend curve through the chart points. The knots sit at
//! unit-spaced x positions (the sample index); the interpolant never
//! overshoots between two neighbouring knots.

/// Samples a monotone cubic curve through `values` at unit-spaced knots.
///
/// # Arguments
/// * `values` - The knot values at x = 0, 1, 2, ...
/// * `points_per_segment` - Number of curve points generated per segment.
///
/// # Returns
/// `[x, y]` pairs covering the full range, including every knot. Fewer than
/// two knots yield the knots themselves.
pub fn sample_monotone_curve(values: &[f64], points_per_segment: usize) -> Vec<[f64; 2]> {
    if values.len() < 2 || points_per_segment < 2 {
        return values
            .iter()
            .enumerate()
            .map(|(i, &y)| [i as f64, y])
            .collect();
    }

    let tangents = knot_tangents(values);
    let segments = values.len() - 1;
    let mut curve = Vec::with_capacity(segments * points_per_segment + 1);
    for seg in 0..segments {
        let (y0, y1) = (values[seg], values[seg + 1]);
        let (m0, m1) = (tangents[seg], tangents[seg + 1]);
        for step in 0..points_per_segment {
            let t = step as f64 / points_per_segment as f64;
            curve.push([seg as f64 + t, hermite(y0, y1, m0, m1, t)]);
        }
    }
    curve.push([segments as f64, values[segments]]);
    curve
}

/// Fritsch-Carlson tangent selection: secant averages clamped so that each
/// segment stays monotone.
fn knot_tangents(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let secants: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();

    let mut tangents = vec![0.0; n];
    tangents[0] = secants[0];
    tangents[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        if secants[i - 1] * secants[i] <= 0.0 {
            // Local extremum, flat tangent.
            tangents[i] = 0.0;
        } else {
            tangents[i] = (secants[i - 1] + secants[i]) / 2.0;
        }
    }

    for i in 0..n - 1 {
        if secants[i] == 0.0 {
            tangents[i] = 0.0;
            tangents[i + 1] = 0.0;
            continue;
        }
        let alpha = tangents[i] / secants[i];
        let beta = tangents[i + 1] / secants[i];
        let norm = alpha * alpha + beta * beta;
        if norm > 9.0 {
            let tau = 3.0 / norm.sqrt();
            tangents[i] = tau * alpha * secants[i];
            tangents[i + 1] = tau * beta * secants[i];
        }
    }
    tangents
}

/// Cubic Hermite basis on a unit-width segment.
fn hermite(y0: f64, y1: f64, m0: f64, m1: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * t3 - 3.0 * t2 + 1.0) * y0
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * y1
        + (t3 - t2) * m1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_passes_through_knots() {
        let values = [72.0, 75.0, 70.0, 68.0, 74.0, 73.0, 71.0];
        let curve = sample_monotone_curve(&values, 8);
        for (i, &y) in values.iter().enumerate() {
            let knot = curve
                .iter()
                .find(|p| (p[0] - i as f64).abs() < 1e-9)
                .unwrap();
            assert!((knot[1] - y).abs() < 1e-9);
        }
    }

    #[test]
    fn monotone_input_yields_monotone_curve() {
        let values = [60.0, 62.0, 67.0, 75.0];
        let curve = sample_monotone_curve(&values, 16);
        for pair in curve.windows(2) {
            assert!(pair[1][1] >= pair[0][1] - 1e-9);
        }
    }

    #[test]
    fn curve_does_not_overshoot_segment_bounds() {
        let values = [70.0, 90.0, 70.0];
        let curve = sample_monotone_curve(&values, 32);
        for p in &curve {
            assert!(p[1] <= 90.0 + 1e-9 && p[1] >= 70.0 - 1e-9);
        }
    }

    #[test]
    fn constant_input_stays_constant() {
        let values = [65.0; 5];
        let curve = sample_monotone_curve(&values, 4);
        assert!(curve.iter().all(|p| (p[1] - 65.0).abs() < 1e-12));
    }

    #[test]
    fn degenerate_inputs_yield_the_knots() {
        assert!(sample_monotone_curve(&[], 8).is_empty());
        assert_eq!(sample_monotone_curve(&[64.0], 8), vec![[0.0, 64.0]]);
    }
}
