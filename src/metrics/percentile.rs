#![expect(
    clippy::float_arithmetic,
    reason = "percentiles interpolate between fractional latency samples"
)]

const PERCENT_DIVISOR: f64 = 100.0;

/// Linear-interpolated percentile of `samples`, `p` in `[0, 100]`.
///
/// With `n` sorted samples the rank is `k = (n - 1) * p / 100`; the result
/// blends the samples at `floor(k)` and `floor(k) + 1` by the fractional
/// part of `k`. Empty input yields `0.0`. The caller's slice is not
/// reordered.
#[must_use]
pub fn percentile(samples: &[f64], p: f64) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    percentile_of_sorted(&sorted, p)
}

/// Same as [`percentile`] for input already sorted ascending.
#[must_use]
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };
    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, PERCENT_DIVISOR) };

    let k = last as f64 * (p / PERCENT_DIVISOR);
    let floor = (k.floor() as usize).min(last);
    let ceil = floor.saturating_add(1).min(last);

    let lower = sorted.get(floor).copied().unwrap_or(0.0);
    if floor == ceil {
        return lower;
    }
    let upper = sorted.get(ceil).copied().unwrap_or(lower);
    lower * (ceil as f64 - k) + upper * (k - floor as f64)
}

/// Arithmetic mean, `0.0` for empty input.
#[must_use]
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}
