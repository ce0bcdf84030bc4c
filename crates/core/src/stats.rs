/// Percentage of queries answered from the cache, floored to a whole number.
///
/// Missing, NaN and non-positive ratios count as 0%. Ratios above 1.0 are
/// clamped so the result is always within 0..=100.
pub fn query_utilization(hit_ratio: Option<f64>) -> u8 {
    let ratio = match hit_ratio {
        Some(r) if r.is_finite() && r > 0.0 => r.min(1.0),
        Some(r) if r == f64::INFINITY => 1.0,
        _ => return 0,
    };

    (ratio * 100.0).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_ratio_is_zero() {
        assert_eq!(query_utilization(None), 0);
    }

    #[test]
    fn test_ratio_is_floored() {
        assert_eq!(query_utilization(Some(0.6)), 60);
        assert_eq!(query_utilization(Some(0.999)), 99);
        assert_eq!(query_utilization(Some(0.005)), 0);
    }

    #[test]
    fn test_out_of_range_ratios_are_clamped() {
        assert_eq!(query_utilization(Some(-0.5)), 0);
        assert_eq!(query_utilization(Some(1.0)), 100);
        assert_eq!(query_utilization(Some(7.5)), 100);
        assert_eq!(query_utilization(Some(f64::INFINITY)), 100);
        assert_eq!(query_utilization(Some(f64::NEG_INFINITY)), 0);
        assert_eq!(query_utilization(Some(f64::NAN)), 0);
    }
}
