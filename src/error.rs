//! Error types and reporting for the dump interpreter.
//!
//! Instead of returning bare strings, fallible functions return `DumpError`
//! which includes:
//! - Error kind (option validation vs. dataset loading)
//! - Human-readable message naming the offending option and value
//! - Optional context hint (valid values, expected range)

use std::fmt;

/// Categorized error types for better diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An option failed its validator
    Validation,
    /// Error loading/parsing the emoji dataset
    Dataset,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Validation => write!(f, "Validation error"),
            ErrorKind::Dataset => write!(f, "Dataset error"),
        }
    }
}

/// Rich error type with context information
#[derive(Debug, Clone)]
pub struct DumpError {
    pub kind: ErrorKind,
    pub message: String,
    /// Additional hint explaining what would have been accepted
    pub context: Option<String>,
}

impl DumpError {
    /// Create a new error with just the kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        DumpError {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Add context string (e.g., "Expected true or false")
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(context) = &self.context {
            write!(f, "\n  hint: {}", context)?;
        }
        Ok(())
    }
}

impl std::error::Error for DumpError {}

/// Convenience type alias for Results with DumpError
pub type DumpResult<T> = Result<T, DumpError>;
