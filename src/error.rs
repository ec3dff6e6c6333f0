//! Error types for template generation

use thiserror::Error;

use crate::generator::GeneratorError;

/// Errors that can end a generation pass.
///
/// Every variant carries the byte offset of the token that caused it, so
/// callers can point at the exact spot in the template.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A token named a key with no registered generator (strict mode only)
    #[error("unknown generator '{key}' at offset {offset}")]
    UnknownGenerator { key: String, offset: usize },

    /// The template ended while still inside a token (strict mode only)
    #[error("unclosed token at offset {offset}")]
    UnclosedToken { offset: usize },

    /// A registered generator returned an error; fatal in both modes
    #[error("generator '{key}' failed at offset {offset}: {source}")]
    GeneratorFailure {
        key: String,
        offset: usize,
        #[source]
        source: GeneratorError,
    },
}

impl GenerateError {
    /// Byte offset of the opening brace of the token that failed
    pub fn offset(&self) -> usize {
        match self {
            GenerateError::UnknownGenerator { offset, .. }
            | GenerateError::UnclosedToken { offset }
            | GenerateError::GeneratorFailure { offset, .. } => *offset,
        }
    }

    /// Key of the offending token, when the failure names one
    pub fn key(&self) -> Option<&str> {
        match self {
            GenerateError::UnknownGenerator { key, .. }
            | GenerateError::GeneratorFailure { key, .. } => Some(key),
            GenerateError::UnclosedToken { .. } => None,
        }
    }
}
