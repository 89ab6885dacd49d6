pub mod fibonacci;
pub mod multiples;
pub mod prime;

pub use fibonacci::{Fibonacci, fibonacci, fibonacci_term, sum_even_fibonacci_below};
pub use multiples::{MAX_MULTIPLES_BOUND, sum_multiples};
pub use prime::{is_prime, largest_prime_factor};
