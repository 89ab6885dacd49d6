pub mod error;
pub mod logger;
pub mod solutions;

pub use error::{Error, Result};

/// Available problem IDs
pub const PROBLEMS: &[u32] = &[1, 2, 3];

/// Problems printed when the binary runs without flags
pub const STARTUP_PROBLEMS: &[u32] = &[1, 2];

/// Run a specific problem and return the answer
pub fn run_problem(id: u32) -> Result<String> {
    let _span = tracing::debug_span!("problem", id).entered();
    match id {
        1 => solutions::pe1::solve(),
        2 => Ok(solutions::pe2::solve()),
        3 => solutions::pe3::solve(),
        _ => Err(Error::UnknownProblem(id)),
    }
}

/// Format an answer the way the binary prints it
pub fn format_answer(id: u32, answer: &str) -> String {
    format!("Problem {}: {}", id, answer)
}
