use crate::error::{Error, Result};
use math::sum_multiples;

/// PE1: Multiples of 3 or 5
/// Find the sum of all the multiples of 3 or 5 below 1000.
pub fn solve() -> Result<String> {
    let bound = 1000;
    let sum = sum_multiples(bound).ok_or(Error::NoAnswer(1))?;
    tracing::debug!(bound, sum, "summed multiples of 3 or 5");
    Ok(sum.to_string())
}
