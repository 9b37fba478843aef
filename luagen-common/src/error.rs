//! Error handling for the IR to Lua translator
//!
//! This module defines the translator's error taxonomy and the facade the
//! backend reports through. The facade only records; whether translation goes
//! on after a recoverable error is decided by the caller's options.

use std::fmt;
use thiserror::Error;

/// Main translator error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    #[error("Call arity error in function '{function}': callee declares {results} results, at most one can be assigned")]
    CallArity { function: String, results: usize },

    #[error("Unsupported opcode in function '{function}': {opcode} has no Lua translation")]
    Unsupported { function: String, opcode: String },

    #[error("Internal translator error: {message}")]
    Internal { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl TranslateError {
    /// Create an internal invariant violation
    pub fn internal(message: impl Into<String>) -> Self {
        TranslateError::Internal {
            message: message.into(),
        }
    }

    /// The diagnostic kind this error is reported under, if it is reportable.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            TranslateError::CallArity { .. } => Some(ErrorKind::CallArity),
            TranslateError::Unsupported { .. } => Some(ErrorKind::UnsupportedOpcode),
            TranslateError::Internal { .. } => Some(ErrorKind::Internal),
            TranslateError::IoError { .. } => None,
        }
    }

    /// Internal errors abort translation no matter what the error policy says.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TranslateError::Internal { .. } | TranslateError::IoError { .. }
        )
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for TranslateError {
    fn from(err: std::io::Error) -> Self {
        TranslateError::IoError {
            message: err.to_string(),
        }
    }
}

/// Kinds of errors reported through an [`ErrorSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A call whose prototype declares more than one result
    CallArity,
    /// An opcode with no Lua template (stack allocation, varargs, ...)
    UnsupportedOpcode,
    /// Upstream IR contract breach; never recoverable
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CallArity => write!(f, "call arity error"),
            ErrorKind::UnsupportedOpcode => write!(f, "unsupported opcode"),
            ErrorKind::Internal => write!(f, "internal error"),
        }
    }
}

/// Error-reporting facade the backend calls into
pub trait ErrorSink {
    fn report(&mut self, kind: ErrorKind, message: &str);
}

/// A reported diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }

        Ok(())
    }
}

/// Error reporter for collecting and displaying diagnostics
#[derive(Debug, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    internal_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Number of internal invariant violations among the reported errors
    pub fn internal_count(&self) -> usize {
        self.internal_count
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Clear all diagnostics
    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.internal_count = 0;
    }

    /// Print all diagnostics to stderr
    pub fn print_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            eprintln!("{}", diagnostic);
        }
    }

    /// Create a summary string
    pub fn summary(&self) -> String {
        match self.error_count() {
            0 => "No errors".to_string(),
            1 => "1 error".to_string(),
            n => format!("{} errors", n),
        }
    }
}

impl ErrorSink for ErrorReporter {
    fn report(&mut self, kind: ErrorKind, message: &str) {
        if kind == ErrorKind::Internal {
            self.internal_count += 1;
        }
        self.diagnostics
            .push(Diagnostic::new(kind, message.to_string()));
    }
}
