/// Target number of grid intervals across a range.
pub const GRID_TARGET_INTERVALS: f64 = 10.0;

/// Returns the distance between adjacent grid lines for `[min, max]`.
///
/// The result is a "nice" number `{1, 2, 5} x 10^k` chosen so that roughly
/// ten intervals span the range. Only `|max - min|` matters.
#[must_use]
pub fn grid_spacing(min: f64, max: f64) -> f64 {
    let range = (max - min).abs();
    if !range.is_finite() || range <= 0.0 {
        return 1.0;
    }

    let rough = range / GRID_TARGET_INTERVALS;
    let magnitude = 10f64.powf(rough.log10().floor());
    let residual = rough / magnitude;

    let nice = if residual <= 1.0 {
        1.0
    } else if residual < 3.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Returns every multiple of `grid_spacing(min, max)` inside `[min, max]`,
/// in ascending order.
#[must_use]
pub fn grid_lines(min: f64, max: f64) -> Vec<f64> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    if !low.is_finite() || !high.is_finite() {
        return Vec::new();
    }

    let spacing = grid_spacing(low, high);
    let first = (low / spacing).ceil();
    let last = (high / spacing).floor();
    if last < first {
        return Vec::new();
    }

    let count = (last - first) as usize + 1;
    (0..count)
        .map(|index| {
            let value = (first + index as f64) * spacing;
            // Avoid "-0.00" labels.
            if value == 0.0 { 0.0 } else { value }
        })
        .filter(|value| *value >= low && *value <= high)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{grid_lines, grid_spacing};

    #[test]
    fn degenerate_range_falls_back_to_unit_spacing() {
        assert_eq!(grid_spacing(3.0, 3.0), 1.0);
        assert_eq!(grid_spacing(f64::NAN, 1.0), 1.0);
    }

    #[test]
    fn grid_lines_start_at_first_multiple_inside_range() {
        let lines = grid_lines(-3.5, 6.0);
        assert_eq!(lines.first().copied(), Some(-3.0));
        assert_eq!(lines.last().copied(), Some(6.0));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn zero_grid_line_is_positive_zero() {
        let lines = grid_lines(-0.5, 9.0);
        assert_eq!(lines.first().copied(), Some(0.0));
        assert!(lines[0].is_sign_positive());
    }
}
