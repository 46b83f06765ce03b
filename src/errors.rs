use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type GravityResult<T> = Result<T, GravityError>;

#[derive(Debug, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GravityError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Data parsing failed: {message}")]
    ParsingError { message: String },

    #[error("Data not available: {message}")]
    DataUnavailable { message: String },

    /// Errors from external libraries (filesystem, network, etc.)
    ///
    /// This is deliberately unstructured (just a string) since external error types vary widely.
    /// If richer context is needed for specific external errors, add dedicated variants.
    #[error("External error: {message}")]
    ExternalError { message: String },
}

impl GravityError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn parsing_error(message: impl Into<String>) -> Self {
        Self::ParsingError {
            message: message.into(),
        }
    }

    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }

    pub fn external_library(operation: &str, error: &str) -> Self {
        Self::ExternalError {
            message: format!("{}: {}", operation, error),
        }
    }
}
