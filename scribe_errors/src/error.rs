//! Framework error type and factory construction
//!
//! `FrameworkError` has private fields and no public constructor: the only
//! sanctioned way to build one is through [`create_error`] (or the
//! mode-injected [`create_error_with_mode`] used by embedders and tests).

use crate::codes::{global_table, ErrorCode, ErrorMessageTable};
use crate::config::RuntimeMode;

/// Options for requesting a new [`FrameworkError`]
///
/// The code stays string-typed on purpose: unrecognized or missing codes are
/// coerced to [`ErrorCode::Custom`] rather than rejected, so externally
/// supplied values can never make error construction itself fail.
#[derive(Debug, Clone, Default)]
pub struct ErrorOptions {
    /// Requested error code by canonical name
    pub code: Option<String>,
    /// Extra detail inserted into the rendered message
    pub message: Option<String>,
}

impl ErrorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying a known code and no extra detail
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code: Some(code.as_str().to_string()),
            message: None,
        }
    }

    /// Options carrying a known code plus extra detail
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.as_str().to_string()),
            message: Some(message.into()),
        }
    }
}

/// The structured error value produced by this crate
///
/// Carries the effective error code and a fully rendered message ending in
/// the per-code documentation link. Immutable after creation.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct FrameworkError {
    error_code: ErrorCode,
    message: String,
}

impl FrameworkError {
    fn with_table(table: &ErrorMessageTable, options: ErrorOptions) -> Self {
        let error_code = options
            .code
            .as_deref()
            .and_then(ErrorCode::from_name)
            .unwrap_or(ErrorCode::Custom);

        let message = table.resolve(error_code, options.message.as_deref());

        Self { error_code, message }
    }

    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Build a [`FrameworkError`] using the process-wide message table
pub fn create_error(options: ErrorOptions) -> FrameworkError {
    FrameworkError::with_table(global_table(), options)
}

/// Build a [`FrameworkError`] for an explicitly supplied runtime mode.
///
/// Bypasses the process-wide table so both modes stay testable in a single
/// process.
pub fn create_error_with_mode(mode: RuntimeMode, options: ErrorOptions) -> FrameworkError {
    FrameworkError::with_table(&ErrorMessageTable::for_mode(mode), options)
}
