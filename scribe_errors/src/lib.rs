//! Error signaling for the Scribe editor framework
//!
//! Maps symbolic error codes to developer-facing messages, wraps them in a
//! typed [`FrameworkError`] built only through the [`create_error`] factory,
//! and provides [`invariant`] checks that fail with a constructed error.
//! In production mode descriptive detail is suppressed: the message table
//! stays empty and failed invariants collapse to the generic
//! [`ErrorCode::Prod`] error.

// Internal modules
pub mod codes;
pub mod config;
pub mod error;
pub mod invariant;
pub mod macros;

// Re-export key types for library consumers
pub use codes::{resolve_message, ErrorCode, ErrorMessageTable, ERRORS_DOC_URL};
pub use config::{current_mode, init_runtime_mode, RuntimeMode};
pub use error::{create_error, create_error_with_mode, ErrorOptions, FrameworkError};
pub use invariant::{invariant, invariant_with_mode};

#[cfg(test)]
mod tests {
    use super::*;

    // The process-wide mode is decided once per process, so these tests only
    // assert properties that hold for whichever mode was decided. The
    // positive initialization path is covered by the `init_runtime_mode`
    // doctest, which runs in its own process.

    #[test]
    fn process_wide_mode_is_decided_once() {
        let mode = current_mode();
        assert!(init_runtime_mode(mode).is_err());
        assert_eq!(current_mode(), mode);
    }

    #[test]
    fn process_wide_resolution_uses_one_table() {
        let message = resolve_message(ErrorCode::Unknown, None);
        assert_eq!(message, resolve_message(ErrorCode::Unknown, None));
        assert!(message.ends_with(&format!(
            "For more information visit {}#UNKNOWN",
            ERRORS_DOC_URL
        )));
    }

    #[test]
    fn factory_uses_the_process_wide_table() {
        let created = create_error(ErrorOptions::from_code(ErrorCode::Schema));
        assert_eq!(created.message(), resolve_message(ErrorCode::Schema, None));
    }

    #[test]
    fn invariant_true_path_ignores_the_process_mode() {
        assert!(invariant(true, ErrorOptions::from_code(ErrorCode::Schema)).is_ok());
    }
}
