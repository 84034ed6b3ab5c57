// error.rs - Error types for the Game of Life engine

use thiserror::Error;

/// Errors raised by grid allocation and pattern parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid would end up with no rows or no columns
    #[error("invalid grid dimensions: {width}x{height} (both must be at least 1)")]
    InvalidDimensions { width: usize, height: usize },

    /// Plaintext pattern contained no cell rows
    #[error("pattern has no cell rows")]
    EmptyPattern,
}

pub type Result<T> = std::result::Result<T, LifeError>;
