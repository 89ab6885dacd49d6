/// Iterator over the Fibonacci sequence seeded with 1 and 2.
///
/// The iterator ends once the next term no longer fits in a `u64`.
///
/// # Example
///
/// ```
/// use math::fibonacci::Fibonacci;
///
/// let fibs: Vec<u64> = Fibonacci::new().take(10).collect();
/// assert_eq!(fibs, vec![1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
/// ```
pub struct Fibonacci {
    curr: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Fibonacci {
            curr: Some(1),
            next: Some(2),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.curr?;
        self.curr = self.next;
        self.next = self.next.and_then(|next| curr.checked_add(next));
        Some(curr)
    }
}

/// Returns an iterator over the sequence 1, 2, 3, 5, 8, ...
pub fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}

/// Returns the term at `index` (0-indexed: term(0) = 1, term(1) = 2, term(2) = 3, ...).
///
/// Every call walks a fresh generator. Returns None if the term overflows u64.
///
/// # Example
///
/// ```
/// use math::fibonacci::fibonacci_term;
///
/// assert_eq!(fibonacci_term(0), Some(1));
/// assert_eq!(fibonacci_term(9), Some(89));
/// assert_eq!(fibonacci_term(200), None);
/// ```
pub fn fibonacci_term(index: usize) -> Option<u64> {
    Fibonacci::new().nth(index)
}

/// Sum of the even-valued terms strictly below `limit`.
///
/// Terms are fetched by index until one reaches `limit`; that term is excluded.
///
/// # Example
///
/// ```
/// use math::fibonacci::sum_even_fibonacci_below;
///
/// // 2 + 8
/// assert_eq!(sum_even_fibonacci_below(10), 10);
/// ```
pub fn sum_even_fibonacci_below(limit: u64) -> u64 {
    (0..)
        .map_while(fibonacci_term)
        .take_while(|&term| term < limit)
        .filter(|term| term % 2 == 0)
        .sum()
}
