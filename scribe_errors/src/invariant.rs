//! Invariant assertion helpers
//!
//! The single control-flow mechanism for invariant violations in the
//! framework: callers use these instead of manual conditional-error blocks,
//! and recover (or not) wherever the `Result` is consumed.

use crate::config::{current_mode, RuntimeMode};
use crate::error::{create_error_with_mode, ErrorOptions, FrameworkError};
use crate::ErrorCode;

/// Check an invariant against an explicitly supplied runtime mode.
///
/// Returns `Ok(())` when the condition holds. When it fails in production
/// mode the caller's options are discarded entirely and the error carries
/// [`ErrorCode::Prod`]; otherwise the error is built from the options
/// verbatim so developers see the intended code and message.
pub fn invariant_with_mode(
    mode: RuntimeMode,
    condition: bool,
    options: ErrorOptions,
) -> Result<(), FrameworkError> {
    if condition {
        return Ok(());
    }

    let options = if mode.is_production() {
        ErrorOptions::from_code(ErrorCode::Prod)
    } else {
        options
    };

    Err(create_error_with_mode(mode, options))
}

/// Check an invariant against the process-wide runtime mode
pub fn invariant(condition: bool, options: ErrorOptions) -> Result<(), FrameworkError> {
    invariant_with_mode(current_mode(), condition, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn holding_invariant_is_a_no_op() {
        let options = ErrorOptions::with_message(ErrorCode::Internal, "never rendered");
        assert_matches!(
            invariant_with_mode(RuntimeMode::Development, true, options.clone()),
            Ok(())
        );
        assert_matches!(
            invariant_with_mode(RuntimeMode::Production, true, options),
            Ok(())
        );
    }

    #[test]
    fn development_failure_preserves_code_and_message() {
        let options =
            ErrorOptions::with_message(ErrorCode::ManagerPhaseError, "addCommands ran twice");
        let error = invariant_with_mode(RuntimeMode::Development, false, options).unwrap_err();
        assert_eq!(error.error_code(), ErrorCode::ManagerPhaseError);
        assert!(error.message().contains("addCommands ran twice"));
    }

    #[test]
    fn production_failure_collapses_to_prod() {
        let options =
            ErrorOptions::with_message(ErrorCode::ManagerPhaseError, "internal detail");
        let error = invariant_with_mode(RuntimeMode::Production, false, options).unwrap_err();
        assert_eq!(error.error_code(), ErrorCode::Prod);
        assert!(!error.message().contains("internal detail"));
        assert!(!error.message().contains("MANAGER_PHASE_ERROR"));
        assert!(error.message().contains("#PROD"));
    }

    #[test]
    fn failure_with_empty_options_yields_custom() {
        let error =
            invariant_with_mode(RuntimeMode::Development, false, ErrorOptions::new()).unwrap_err();
        assert_eq!(error.error_code(), ErrorCode::Custom);
    }

    #[test]
    fn composes_with_question_mark() {
        fn guarded(count: usize) -> Result<usize, FrameworkError> {
            invariant(
                count > 0,
                ErrorOptions::with_message(ErrorCode::InvalidCommandArguments, "count was zero"),
            )?;
            Ok(count * 2)
        }

        assert_matches!(guarded(3), Ok(6));
        assert_matches!(guarded(0), Err(_));
    }
}
