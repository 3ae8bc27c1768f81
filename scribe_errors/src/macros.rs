//! Convenience macro over the invariant helpers

/// Check an invariant, building the error options in place.
///
/// Expands to a call to [`invariant`](crate::invariant) so it composes with
/// `?` in any function returning `Result<_, FrameworkError>`:
///
/// ```
/// use scribe_errors::{invariant, ErrorCode, FrameworkError};
///
/// fn register_command(name: &str) -> Result<(), FrameworkError> {
///     invariant!(!name.is_empty(), code = ErrorCode::InvalidName)?;
///     invariant!(
///         name.chars().all(|c| c.is_ascii_lowercase()),
///         code = ErrorCode::InvalidName,
///         "`{}` contains characters outside a-z",
///         name
///     )?;
///     Ok(())
/// }
///
/// assert!(register_command("bold").is_ok());
/// assert!(register_command("Bold").is_err());
/// ```
#[macro_export]
macro_rules! invariant {
    ($condition:expr, code = $code:expr) => {
        $crate::invariant($condition, $crate::ErrorOptions::from_code($code))
    };

    ($condition:expr, code = $code:expr, $($arg:tt)+) => {
        $crate::invariant(
            $condition,
            $crate::ErrorOptions::with_message($code, format!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{ErrorCode, FrameworkError};

    #[test]
    fn macro_passes_through_on_success() {
        let result: Result<(), FrameworkError> =
            invariant!(1 + 1 == 2, code = ErrorCode::Internal);
        assert!(result.is_ok());
    }

    #[test]
    fn macro_builds_code_only_options() {
        let error = invariant!(false, code = ErrorCode::Mutation).unwrap_err();
        assert_eq!(error.error_code(), ErrorCode::Mutation);
    }

    #[test]
    fn macro_formats_extra_detail() {
        let name = "toolbar";
        let error = invariant!(
            false,
            code = ErrorCode::DuplicateHelperNames,
            "helper `{}` registered twice",
            name
        )
        .unwrap_err();
        assert_eq!(error.error_code(), ErrorCode::DuplicateHelperNames);
        assert!(error.message().contains("helper `toolbar` registered twice"));
    }
}
