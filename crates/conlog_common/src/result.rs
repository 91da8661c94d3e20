//! Common result and error types for the logging pipeline.

use std::error::Error;
use std::fmt;
use std::io;

/// The standard result type for logging and fault-signaling operations.
pub type ConlogResult<T> = Result<T, Fault>;

/// An error raised by the logging pipeline.
///
/// Faults are always returned to the immediate caller. The logger never
/// downgrades one into a log line of its own.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    /// A raised diagnostic: a failed assertion, an explicit throw, or a
    /// severity the category does not accept.
    #[error("{0}")]
    Raised(String),

    /// A value's text conversion failed while formatting a message.
    #[error("failed to format log message")]
    Format(#[from] fmt::Error),

    /// Writing to the console failed.
    #[error("failed to write to console: {0}")]
    Io(#[from] io::Error),
}

impl Fault {
    /// Returns the diagnostic payload if this fault was raised explicitly.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Fault::Raised(message) => Some(message),
            _ => None,
        }
    }
}

/// Error kinds that can be built from a raised diagnostic string.
///
/// Fault-signaling helpers are generic over this trait so that callers can
/// choose which error kind a failed check produces.
pub trait FromDiagnostic: Sized {
    /// Builds the error from a fully formatted diagnostic.
    fn from_diagnostic(diagnostic: String) -> Self;
}

impl FromDiagnostic for Fault {
    fn from_diagnostic(diagnostic: String) -> Self {
        Fault::Raised(diagnostic)
    }
}

impl FromDiagnostic for String {
    fn from_diagnostic(diagnostic: String) -> Self {
        diagnostic
    }
}

impl FromDiagnostic for io::Error {
    fn from_diagnostic(diagnostic: String) -> Self {
        io::Error::new(io::ErrorKind::Other, diagnostic)
    }
}

impl FromDiagnostic for Box<dyn Error + Send + Sync> {
    fn from_diagnostic(diagnostic: String) -> Self {
        diagnostic.into()
    }
}
