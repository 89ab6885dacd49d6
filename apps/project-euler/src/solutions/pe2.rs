use math::sum_even_fibonacci_below;

/// PE2: Even Fibonacci Numbers
/// Sum the even-valued terms of 1, 2, 3, 5, 8, ... below four million.
pub fn solve() -> String {
    let limit = 4_000_000;
    let sum = sum_even_fibonacci_below(limit);
    tracing::debug!(limit, sum, "summed even fibonacci terms");
    sum.to_string()
}
