//! Parsing error taxonomy
//!
//! Row-scoped errors are recovered inside the listing loop (the row is
//! dropped and logged); everything else propagates to the caller. Nothing
//! in this layer retries.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("document could not be parsed as markup: {message}")]
    StructuralParseFailed { message: String },

    #[error("invalid input: {what}")]
    InvalidInput { what: String },

    #[error("row field '{field}' could not be extracted: {reason}")]
    RowField { field: String, reason: String },

    #[error("field '{field}' is not a valid number: '{text}'")]
    InvalidNumber { field: String, text: String },

    #[error("text is not a valid date: '{text}'")]
    InvalidDate { text: String },
}

impl ParseError {
    pub fn structural(message: impl Into<String>) -> Self {
        Self::StructuralParseFailed {
            message: message.into(),
        }
    }

    pub fn invalid_input(what: impl Into<String>) -> Self {
        Self::InvalidInput { what: what.into() }
    }

    pub fn row_field(field: &str, reason: impl Into<String>) -> Self {
        Self::RowField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_number(field: &str, text: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
            text: text.to_string(),
        }
    }

    pub fn invalid_date(text: &str) -> Self {
        Self::InvalidDate {
            text: text.to_string(),
        }
    }

    /// True for errors the listing loop swallows instead of surfacing.
    pub fn is_row_scoped(&self) -> bool {
        matches!(
            self,
            Self::RowField { .. } | Self::InvalidNumber { .. } | Self::InvalidDate { .. }
        )
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
