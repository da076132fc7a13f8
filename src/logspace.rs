//! Arithmetic on probabilities held as natural logarithms.
//!
//! Negative infinity stands for probability zero. Every helper here treats it
//! as the additive identity, so sums over impossible events stay at `-inf`
//! instead of turning into `NaN`.

/// Computes `ln(e^a + e^b)` as `max(a, b) + ln(1 + e^-|a - b|)`.
pub fn log_add(a: f64, b: f64) -> f64 {
    if a == f64::NEG_INFINITY {
        return b;
    }
    if b == f64::NEG_INFINITY {
        return a;
    }
    let (hi, lo) = if a > b { (a, b) } else { (b, a) };
    hi + (lo - hi).exp().ln_1p()
}

/// Log-sum-exp over a slice. An empty slice sums to `-inf`.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    log_sum_exp_iter(values.iter().copied())
}

/// Log-sum-exp over any iterator of log values.
pub fn log_sum_exp_iter<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(f64::NEG_INFINITY, log_add)
}

/// Index and value of the largest entry. Ties resolve to the lowest index
/// because only a strictly greater value replaces the current best.
///
/// Returns `(0, -inf)` when there are no values or all of them are `-inf`.
pub fn argmax<I>(values: I) -> (usize, f64)
where
    I: IntoIterator<Item = f64>,
{
    let mut best_index = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, v) in values.into_iter().enumerate() {
        if v > best_value {
            best_value = v;
            best_index = i;
        }
    }
    (best_index, best_value)
}
