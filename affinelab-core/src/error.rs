//! Error types for affinelab

use thiserror::Error;

/// Main error type for affinelab operations
#[derive(Error, Debug)]
pub enum Error {
    /// Numeric input outside the operation's domain: NaN/Inf coordinates,
    /// a zero-norm rotation axis, a zero homogeneous coordinate, or a zero
    /// representation-scale factor.
    #[error("Domain error: {0}")]
    Domain(String),

    /// A transform was requested while the corresponding point set is empty.
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result type alias for affinelab operations
pub type Result<T> = std::result::Result<T, Error>;
