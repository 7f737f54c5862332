//! Error types for the checked entry points
//!
//! The plain helpers are total and never produce these; only the checked
//! modulo and the conditioning configuration report failures.

use thiserror::Error;

/// Errors reported by checked operations and configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("Modulus must be non-zero")]
    ZeroModulus,
    #[error("Integer overflow while wrapping remainder")]
    Overflow,
    #[error("Low-pass alpha must be finite and within [0, 1], got {0}")]
    InvalidAlpha(f64),
    #[error("Deadzone threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, MathError>;
