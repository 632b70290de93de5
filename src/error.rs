// Error types for generator construction and output requests

use thiserror::Error;

/// Errors that can occur when building or driving a generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Seed {0} is outside the accepted range 1000..=9999")]
    InvalidSeed(i64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
