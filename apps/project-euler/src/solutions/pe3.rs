use crate::error::{Error, Result};
use math::{is_prime, largest_prime_factor};

const NUMBER: u64 = 600_851_475_143;

/// PE3: Largest Prime Factor
/// Find the largest prime factor of 600851475143.
pub fn solve() -> Result<String> {
    let factor = largest_prime_factor(NUMBER).ok_or(Error::NoAnswer(3))?;
    debug_assert!(is_prime(factor));
    tracing::debug!(number = NUMBER, factor, "found largest prime factor");
    Ok(factor.to_string())
}
