//! IR to Lua translator - Common Types and Utilities
//!
//! This crate contains the error taxonomy and the error-reporting facade
//! shared by the IR model, the backend and the driver.

pub mod error;

pub use error::{Diagnostic, ErrorKind, ErrorReporter, ErrorSink, TranslateError};
