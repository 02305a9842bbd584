//! Bounded normalization helpers shared by the score engines and the
//! similarity metric. Raw metrics arrive on mixed scales (hours, counts,
//! 1-10 ratings); everything here maps into [0, 100] or a symmetric ratio.

/// Linear ramp above a baseline, clamped to [0, 100].
pub fn ramp_above(value: f64, baseline: f64, slope: f64) -> f64 {
    ((value - baseline) * slope).clamp(0.0, 100.0)
}

/// Linear ramp below a baseline (deficit), clamped to [0, 100].
pub fn ramp_below(value: f64, baseline: f64, slope: f64) -> f64 {
    ((baseline - value) * slope).clamp(0.0, 100.0)
}

/// Maps a 1-10 rating onto [0, 100].
pub fn direct_scale(rating: f64) -> f64 {
    (rating * 10.0).clamp(0.0, 100.0)
}

/// Maps a 1-10 rating onto [0, 100], inverted: a low rating scores high.
pub fn inverse_scale(rating: f64) -> f64 {
    ((10.0 - rating) * 10.0).clamp(0.0, 100.0)
}

/// Symmetric normalized difference between two non-negative readings:
/// `|a - b| / mean(a, b)`, with 0 when both readings are zero.
///
/// Normalizing by the mean (not by one side) keeps the measure symmetric
/// in its arguments, so any similarity built on it satisfies
/// `sim(a, b) == sim(b, a)`.
pub fn symmetric_diff(a: f64, b: f64) -> f64 {
    let mean = (a + b) / 2.0;
    if mean == 0.0 {
        0.0
    } else {
        (a - b).abs() / mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_clamp_both_ends() {
        assert_eq!(ramp_above(30.0, 40.0, 5.0), 0.0);
        assert_eq!(ramp_above(70.0, 40.0, 5.0), 100.0);
        assert_eq!(ramp_above(50.0, 40.0, 5.0), 50.0);
        assert_eq!(ramp_below(9.0, 7.5, 15.0), 0.0);
        assert_eq!(ramp_below(0.0, 7.5, 15.0), 100.0);
    }

    #[test]
    fn scales_clamp_out_of_range_ratings() {
        assert_eq!(direct_scale(15.0), 100.0);
        assert_eq!(direct_scale(-2.0), 0.0);
        assert_eq!(inverse_scale(2.0), 80.0);
        assert_eq!(inverse_scale(12.0), 0.0);
    }

    #[test]
    fn symmetric_diff_handles_double_zero() {
        assert_eq!(symmetric_diff(0.0, 0.0), 0.0);
    }

    #[test]
    fn symmetric_diff_is_symmetric() {
        assert_eq!(symmetric_diff(55.0, 40.0), symmetric_diff(40.0, 55.0));
    }

    #[test]
    fn symmetric_diff_caps_at_two_against_zero() {
        assert_eq!(symmetric_diff(80.0, 0.0), 2.0);
    }
}
