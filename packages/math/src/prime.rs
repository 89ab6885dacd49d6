//! Trial-division primality and factorization.

/// Returns true if `n` is prime.
///
/// # Example
///
/// ```
/// use math::prime::is_prime;
///
/// assert!(is_prime(29));
/// assert!(!is_prime(1));
/// assert!(!is_prime(6857 * 71));
/// ```
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 => true,
        _ if n.is_multiple_of(2) => false,
        _ => (3..)
            .step_by(2)
            .take_while(|&d| d <= n / d)
            .all(|d| !n.is_multiple_of(d)),
    }
}

/// Largest prime factor of `n`, or None if `n < 2`.
///
/// Factors are divided out smallest first; whatever remains once the
/// candidate passes `sqrt(n)` is itself prime.
///
/// # Example
///
/// ```
/// use math::prime::largest_prime_factor;
///
/// // 13195 = 5 * 7 * 13 * 29
/// assert_eq!(largest_prime_factor(13195), Some(29));
/// assert_eq!(largest_prime_factor(1), None);
/// ```
pub fn largest_prime_factor(n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }

    let mut rest = n;
    let mut largest = 1;
    while rest.is_multiple_of(2) {
        largest = 2;
        rest /= 2;
    }

    let mut factor = 3;
    while factor <= rest / factor {
        while rest.is_multiple_of(factor) {
            largest = factor;
            rest /= factor;
        }
        factor += 2;
    }

    Some(if rest > 1 { rest } else { largest })
}
