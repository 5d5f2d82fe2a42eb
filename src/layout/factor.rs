// Mon Aug 24 2026 - Alex

/// Largest power of two that evenly divides `number`. Returns 1 for odd
/// input and for 0 (the degenerate floor), `number` itself when `number`
/// is a power of two.
pub fn largest_pow2_factor(number: usize) -> usize {
    // 0 divides by every power of two; cut the scan short.
    if number == 0 {
        return 1;
    }

    // Linear doubling scan rather than a bit trick, so the routine reads
    // the same at any size width.
    let mut pow = 1usize;
    let mut next = 2usize;
    while next <= number && number % next == 0 {
        pow = next;
        match next.checked_mul(2) {
            Some(doubled) => next = doubled,
            None => break,
        }
    }
    pow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_factors() {
        assert_eq!(largest_pow2_factor(1), 1);
        assert_eq!(largest_pow2_factor(7), 1);
        assert_eq!(largest_pow2_factor(8), 8);
        assert_eq!(largest_pow2_factor(12), 4);
        assert_eq!(largest_pow2_factor(24), 8);
        assert_eq!(largest_pow2_factor(96), 32);
    }

    #[test]
    fn test_zero_returns_one() {
        assert_eq!(largest_pow2_factor(0), 1);
    }

    #[test]
    fn test_odd_max_returns_one() {
        assert_eq!(largest_pow2_factor(usize::MAX), 1);
    }

    #[test]
    fn test_top_power_of_two() {
        let top = usize::MAX / 2 + 1;
        assert_eq!(largest_pow2_factor(top), top);
    }

    #[test]
    fn test_factor_properties() {
        for n in 1usize..=4096 {
            let factor = largest_pow2_factor(n);
            assert!(factor.is_power_of_two(), "factor of {} not a power of two", n);
            assert_eq!(n % factor, 0, "factor of {} does not divide it", n);
            assert!(factor <= n);

            // The next power of two must be rejected for one of the
            // documented reasons.
            if let Some(doubled) = factor.checked_mul(2) {
                assert!(doubled > n || n % doubled != 0);
            }
        }
    }
}
