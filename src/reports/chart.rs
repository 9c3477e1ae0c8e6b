// src/reports/chart.rs

/// Plot coordinates for a simple line/bar chart.
///
/// x is spread evenly over `0..=width` (a lone value sits in the middle); y
/// is flipped so the largest value touches the top and zero sits on the
/// bottom edge at `height`. Negative values are drawn as zero.
pub fn chart_points(values: &[f64], width: f64, height: f64) -> Vec<(f64, f64)> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if values.len() == 1 {
                width / 2.0
            } else {
                step * i as f64
            };
            let v = if v.is_finite() { v.max(0.0) } else { 0.0 };
            let y = if max > 0.0 {
                height - (v / max) * height
            } else {
                height
            };
            (x, y)
        })
        .collect()
}

/// `points` attribute text for an SVG `<polyline>`.
pub fn svg_polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_in_empty_out() {
        assert!(chart_points(&[], 600.0, 300.0).is_empty());
        assert_eq!(svg_polyline(&[]), "");
    }

    #[test]
    fn scales_to_the_box() {
        let pts = chart_points(&[0.0, 50.0, 100.0], 200.0, 100.0);
        assert_eq!(pts, vec![(0.0, 100.0), (100.0, 50.0), (200.0, 0.0)]);
        assert_eq!(svg_polyline(&pts), "0.0,100.0 100.0,50.0 200.0,0.0");
    }

    #[test]
    fn single_value_is_centred() {
        assert_eq!(chart_points(&[7.0], 600.0, 300.0), vec![(300.0, 0.0)]);
    }

    #[test]
    fn all_zero_sits_on_the_baseline() {
        let pts = chart_points(&[0.0, 0.0], 10.0, 20.0);
        assert_eq!(pts, vec![(0.0, 20.0), (10.0, 20.0)]);
    }
}
