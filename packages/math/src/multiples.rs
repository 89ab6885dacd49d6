/// Largest bound whose sum still fits in a `u64`.
pub const MAX_MULTIPLES_BOUND: u64 = 8_891_427_027;

/// Sum of every natural number below `bound` that is a multiple of 3 or 5.
///
/// Values divisible by both (15, 30, ...) are counted once. Returns None if
/// the sum overflows u64, i.e. for any bound above [`MAX_MULTIPLES_BOUND`].
///
/// # Example
///
/// ```
/// use math::multiples::sum_multiples;
///
/// // 3 + 5 + 6 + 9
/// assert_eq!(sum_multiples(10), Some(23));
/// assert_eq!(sum_multiples(9_000_000_000), None);
/// ```
pub fn sum_multiples(bound: u64) -> Option<u64> {
    // Known to overflow; skip the scan.
    if bound > MAX_MULTIPLES_BOUND {
        return None;
    }

    let mut sum: u64 = 0;
    for i in 0..bound {
        if i % 3 == 0 || i % 5 == 0 {
            sum = sum.checked_add(i)?;
        }
    }
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_multiples_stated_example() {
        assert_eq!(sum_multiples(10), Some(23));
    }

    #[test]
    fn test_sum_multiples_empty_range() {
        assert_eq!(sum_multiples(0), Some(0));
        assert_eq!(sum_multiples(1), Some(0));
        // 0 is the only candidate below 3
        assert_eq!(sum_multiples(3), Some(0));
        assert_eq!(sum_multiples(4), Some(3));
    }

    #[test]
    fn test_sum_multiples_counts_fifteen_once() {
        // 3 + 5 + 6 + 9 + 10 + 12 + 15
        assert_eq!(sum_multiples(16), Some(60));
    }

    #[test]
    fn test_sum_multiples_below_thousand() {
        assert_eq!(sum_multiples(100), Some(2318));
        assert_eq!(sum_multiples(1000), Some(233168));
    }

    #[test]
    fn test_sum_multiples_overflow_is_none() {
        // True sum is 18899999995500000000, past u64::MAX
        assert_eq!(sum_multiples(9_000_000_000), None);
        assert_eq!(sum_multiples(MAX_MULTIPLES_BOUND + 1), None);
        assert_eq!(sum_multiples(u64::MAX), None);
    }

    #[test]
    fn test_max_bound_matches_closed_form() {
        // sum of multiples of k below b, in u128 so nothing wraps
        fn multiples_of(k: u128, bound: u128) -> u128 {
            let n = (bound - 1) / k;
            k * n * (n + 1) / 2
        }
        fn closed_form(bound: u64) -> u128 {
            let b = bound as u128;
            multiples_of(3, b) + multiples_of(5, b) - multiples_of(15, b)
        }

        assert_eq!(closed_form(1000), 233168);
        assert!(closed_form(MAX_MULTIPLES_BOUND) <= u64::MAX as u128);
        assert!(closed_form(MAX_MULTIPLES_BOUND + 1) > u64::MAX as u128);
    }

    #[test]
    fn test_sum_multiples_is_pure() {
        assert_eq!(sum_multiples(1000), sum_multiples(1000));
    }
}
