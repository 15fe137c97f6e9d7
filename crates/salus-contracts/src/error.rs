//! Error types for the SALUS advisory engine.
//!
//! The taxonomy is deliberately narrow. Malformed knowledge data is caught
//! when a `KnowledgeStore` is constructed and reported as `ConfigError`;
//! the only runtime error is `InvalidSurface`, raised by the region locator
//! when a caller supplies non-positive surface dimensions. Everything else
//! the engine can produce ("no match" outcomes) is a valid result, not an
//! error.

use thiserror::Error;

/// The unified error type for the SALUS engine.
#[derive(Debug, Error)]
pub enum SalusError {
    /// The static knowledge configuration is malformed.
    ///
    /// Raised only during `KnowledgeStore` construction. A store that
    /// constructs successfully never produces this error at query time.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// The caller passed a non-positive surface dimension to the region
    /// locator. Always caller-induced; retrying cannot succeed.
    #[error("invalid surface dimensions {width}x{height}: both must be positive")]
    InvalidSurface { width: f64, height: f64 },
}

/// Convenience alias used throughout the SALUS crates.
pub type SalusResult<T> = Result<T, SalusError>;
