use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("problem {0} is not implemented")]
    UnknownProblem(u32),
    #[error("problem {0} has no answer")]
    NoAnswer(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
