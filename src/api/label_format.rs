/// Formats a value with two decimals, never producing `-0.00`.
#[must_use]
pub fn format_value(value: f64) -> String {
    let text = format!("{value:.2}");
    if text == "-0.00" {
        "0.00".to_owned()
    } else {
        text
    }
}

/// Formats a coordinate pair as `(x, y)` with two decimals each.
#[must_use]
pub fn format_point(x: f64, y: f64) -> String {
    format!("({}, {})", format_value(x), format_value(y))
}
