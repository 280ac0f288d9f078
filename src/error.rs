//! Errors raised when a commit record is assembled incorrectly.

use std::fmt;

/// The error returned when a [`ConventionalCommit`][crate::ConventionalCommit] cannot be
/// assembled.
///
/// Parsing itself never fails: every header, body and footer is absorbed by a fallback. This
/// error only reports a caller that left out a required part.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,

    field: Option<&'static str>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self { kind, field: None }
    }

    pub(crate) fn set_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The name of the missing or invalid input, if known.
    pub fn field(&self) -> Option<&'static str> {
        self.field
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidInput => f.write_str("invalid input")?,
        }

        if let Some(field) = self.field {
            write!(f, ": missing {field}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// All possible error kinds returned when assembling a commit record.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required input was not supplied.
    InvalidInput,
}
