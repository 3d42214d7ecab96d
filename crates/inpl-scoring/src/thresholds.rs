//! Comparisons of a raw measure against a normative cutoff.
//!
//! Metrics where a low score is worse use the `below_*` pair; timed
//! metrics, where a high score is worse, use the `above_*` pair. Each
//! domain test picks the pair per metric. A missing measure never fails a
//! cutoff.

/// At or beyond the 5th percentile on a low-is-worse metric.
pub fn below_or_equal_5th(value: Option<f64>, c5: f64) -> bool {
    value.is_some_and(|v| v <= c5)
}

/// Under the median on a low-is-worse metric.
pub fn below_50th(value: Option<f64>, c50: f64) -> bool {
    value.is_some_and(|v| v < c50)
}

/// At or beyond the 5th percentile on a high-is-worse metric.
pub fn above_or_equal_5th(value: Option<f64>, c5: f64) -> bool {
    value.is_some_and(|v| v >= c5)
}

/// Over the median on a high-is-worse metric.
pub fn above_50th(value: Option<f64>, c50: f64) -> bool {
    value.is_some_and(|v| v > c50)
}
