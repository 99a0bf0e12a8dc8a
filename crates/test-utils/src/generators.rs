//! Wind speed generators.
//!
//! These produce predictable speed samples for sweeping the classifier and
//! the glyph cache.

/// Evenly spaced speeds in `[start, end]` with the given step.
///
/// # Example
///
/// ```
/// use test_utils::speed_sweep;
///
/// let speeds = speed_sweep(0.0, 1.0, 0.25);
/// assert_eq!(speeds, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn speed_sweep(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end < start {
        return Vec::new();
    }
    let count = ((end - start) / step).round() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

/// Every family value in knots, `0, 5, ..., max_family`.
pub fn family_knots(max_family: u32) -> Vec<u32> {
    (0..=max_family).step_by(5).collect()
}

/// One speed strictly inside each family's classification interval.
///
/// Family `k` (for `k >= 5`) covers `[k - 2, k + 3)`; the sample sits at `k`.
/// Family `0` is skipped since calm speeds never map to it.
pub fn family_representatives(max_family: u32) -> Vec<(u32, f64)> {
    family_knots(max_family)
        .into_iter()
        .filter(|&k| k > 0)
        .map(|k| (k, k as f64))
        .collect()
}

/// Speeds that never produce a glyph.
pub fn out_of_range_speeds(max_family: u32) -> Vec<f64> {
    let limit = max_family as f64;
    vec![limit + 3.0, limit + 10.0, 1.0e6, f64::INFINITY, f64::NEG_INFINITY]
}

/// Deterministic pseudo-random speeds in `[0, max)`.
///
/// Uses a linear congruential generator so tests stay reproducible without
/// a random number dependency.
pub fn pseudo_random_speeds(count: usize, max: f64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64 * max
        })
        .collect()
}
