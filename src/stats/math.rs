/// Adds two optional values, counting a missing operand as zero.
/// Two missing operands still sum to `0.0`.
#[inline(always)]
pub fn nullish_sum(a: Option<f64>, b: Option<f64>) -> f64 {
    a.unwrap_or(0.0) + b.unwrap_or(0.0)
}

/// Divides with a zero or missing denominator yielding `0.0`.
#[inline(always)]
pub fn nullish_divide(a: Option<f64>, b: Option<f64>) -> f64 {
    match b {
        Some(d) if d != 0.0 => a.unwrap_or(0.0) / d,
        _ => 0.0,
    }
}

/// Arithmetic mean, `0.0` for an empty input.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
