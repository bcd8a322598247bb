//! Deterministic numeric helpers for metric scoring.

#![forbid(unsafe_code)]

/// Clamp a value into `[0.0, 1.0]`.
#[must_use]
pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Round a floating point value to `decimals` decimal places.
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Divide and fall back to `fallback` when the denominator is zero.
#[must_use]
pub fn safe_div(numer: f64, denom: f64, fallback: f64) -> f64 {
    if denom == 0.0 { fallback } else { numer / denom }
}

/// Saturating sub-score: `min(1, observed / threshold)`.
///
/// A zero threshold saturates immediately for any positive observation.
#[must_use]
pub fn saturating_score(observed: usize, threshold: f64) -> f64 {
    if threshold <= 0.0 {
        return if observed > 0 { 1.0 } else { 0.0 };
    }
    (observed as f64 / threshold).min(1.0)
}

/// Peaked sub-score: 1.0 at `target`, falling off linearly to 0.0 at a
/// distance of `target` on either side.
#[must_use]
pub fn peak_score(observed: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (1.0 - (observed - target).abs() / target).max(0.0)
}

/// Arithmetic mean; 0.0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(1.5), 1.0);
    }

    #[test]
    fn round_f64_rounds_expected_precision() {
        let value = 12.34567;
        assert_eq!(round_f64(value, 2), 12.35);
        assert_eq!(round_f64(value, 4), 12.3457);
    }

    #[test]
    fn safe_div_guards_divide_by_zero() {
        assert_eq!(safe_div(5.0, 0.0, 0.0), 0.0);
        assert_eq!(safe_div(5.0, 0.0, 0.5), 0.5);
        assert_eq!(safe_div(1.0, 4.0, 0.0), 0.25);
    }

    #[test]
    fn saturating_score_caps_at_one() {
        assert_eq!(saturating_score(0, 5.0), 0.0);
        assert_eq!(saturating_score(2, 5.0), 0.4);
        assert_eq!(saturating_score(5, 5.0), 1.0);
        assert_eq!(saturating_score(50, 5.0), 1.0);
    }

    #[test]
    fn saturating_score_zero_threshold() {
        assert_eq!(saturating_score(0, 0.0), 0.0);
        assert_eq!(saturating_score(1, 0.0), 1.0);
    }

    #[test]
    fn peak_score_is_one_at_target() {
        assert_eq!(peak_score(0.2, 0.2), 1.0);
        assert_eq!(peak_score(0.0, 0.2), 0.0);
        assert_eq!(peak_score(0.4, 0.2), 0.0);
        assert!((peak_score(0.3, 0.2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[0.5]), 0.5);
        assert!((mean(&[0.0, 1.0]) - 0.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn clamp01_always_in_range(v in -1e6f64..1e6) {
            let c = clamp01(v);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        #[test]
        fn saturating_score_always_in_range(n in 0usize..10_000, t in 0.0f64..100.0) {
            let s = saturating_score(n, t);
            prop_assert!((0.0..=1.0).contains(&s));
        }

        #[test]
        fn peak_score_always_in_range(v in -100.0f64..100.0, t in 0.0f64..10.0) {
            let s = peak_score(v, t);
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }
}
