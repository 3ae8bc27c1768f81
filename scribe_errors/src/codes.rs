//! Consolidated error codes and message resolution
//!
//! Single source of truth for the framework error taxonomy. Each code has a
//! canonical SCREAMING_SNAKE name that doubles as the documentation anchor,
//! and a human-readable description that is only shipped to developers: in
//! production mode the message table stays empty and resolved messages carry
//! nothing beyond the caller's detail and the documentation link.

use crate::config::{current_mode, RuntimeMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Base URL for per-code documentation.
///
/// Every resolved message ends with `<ERRORS_DOC_URL>#<CODE_NAME>`. Link
/// generation tooling depends on this exact format.
pub const ERRORS_DOC_URL: &str = "https://scribe-editor.dev/docs/errors";

// ============================================================================
// ERROR CODES
// ============================================================================

/// Symbolic identifiers for every class of failure the framework can signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Core
    /// Stripped production error, all detail withheld
    Prod,
    /// Unclassified failure
    Unknown,
    /// Code not recognized, or thrown by external code
    Custom,
    /// Should-never-happen framework bug
    Internal,
    /// Attempted mutation of a framework-owned immutable value
    Mutation,

    // Manager lifecycle
    ManagerPhaseError,
    InvalidManagerArguments,

    // Extensions and presets
    MissingRequiredExtension,
    InvalidExtension,
    InvalidPreset,

    // Commands and helpers
    InvalidCommandArguments,
    DuplicateCommandNames,
    DuplicateHelperNames,
    NonChainableCommand,
    HelpersCalledInOuterScope,

    // Schema and content
    Schema,
    InvalidName,
    InvalidContent,

    // UI integration
    UiProviderContext,
    UiEditorView,
}

impl ErrorCode {
    /// All registered error codes
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::Prod,
        ErrorCode::Unknown,
        ErrorCode::Custom,
        ErrorCode::Internal,
        ErrorCode::Mutation,
        ErrorCode::ManagerPhaseError,
        ErrorCode::InvalidManagerArguments,
        ErrorCode::MissingRequiredExtension,
        ErrorCode::InvalidExtension,
        ErrorCode::InvalidPreset,
        ErrorCode::InvalidCommandArguments,
        ErrorCode::DuplicateCommandNames,
        ErrorCode::DuplicateHelperNames,
        ErrorCode::NonChainableCommand,
        ErrorCode::HelpersCalledInOuterScope,
        ErrorCode::Schema,
        ErrorCode::InvalidName,
        ErrorCode::InvalidContent,
        ErrorCode::UiProviderContext,
        ErrorCode::UiEditorView,
    ];

    /// Canonical name, also used as the documentation anchor
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Prod => "PROD",
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::Custom => "CUSTOM",
            ErrorCode::Internal => "INTERNAL",
            ErrorCode::Mutation => "MUTATION",
            ErrorCode::ManagerPhaseError => "MANAGER_PHASE_ERROR",
            ErrorCode::InvalidManagerArguments => "INVALID_MANAGER_ARGUMENTS",
            ErrorCode::MissingRequiredExtension => "MISSING_REQUIRED_EXTENSION",
            ErrorCode::InvalidExtension => "INVALID_EXTENSION",
            ErrorCode::InvalidPreset => "INVALID_PRESET",
            ErrorCode::InvalidCommandArguments => "INVALID_COMMAND_ARGUMENTS",
            ErrorCode::DuplicateCommandNames => "DUPLICATE_COMMAND_NAMES",
            ErrorCode::DuplicateHelperNames => "DUPLICATE_HELPER_NAMES",
            ErrorCode::NonChainableCommand => "NON_CHAINABLE_COMMAND",
            ErrorCode::HelpersCalledInOuterScope => "HELPERS_CALLED_IN_OUTER_SCOPE",
            ErrorCode::Schema => "SCHEMA",
            ErrorCode::InvalidName => "INVALID_NAME",
            ErrorCode::InvalidContent => "INVALID_CONTENT",
            ErrorCode::UiProviderContext => "UI_PROVIDER_CONTEXT",
            ErrorCode::UiEditorView => "UI_EDITOR_VIEW",
        }
    }

    /// Look up a code by its canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        ErrorCode::ALL.iter().copied().find(|code| code.as_str() == name)
    }

    /// Coarse grouping used for diagnostics output
    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::Prod
            | ErrorCode::Unknown
            | ErrorCode::Custom
            | ErrorCode::Internal
            | ErrorCode::Mutation => "Core",
            ErrorCode::ManagerPhaseError | ErrorCode::InvalidManagerArguments => "Manager",
            ErrorCode::MissingRequiredExtension
            | ErrorCode::InvalidExtension
            | ErrorCode::InvalidPreset => "Extensions",
            ErrorCode::InvalidCommandArguments
            | ErrorCode::DuplicateCommandNames
            | ErrorCode::DuplicateHelperNames
            | ErrorCode::NonChainableCommand
            | ErrorCode::HelpersCalledInOuterScope => "Commands",
            ErrorCode::Schema | ErrorCode::InvalidName | ErrorCode::InvalidContent => "Schema",
            ErrorCode::UiProviderContext | ErrorCode::UiEditorView => "Ui",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Developer-facing description for an error code.
///
/// These strings never reach a resolved message in production mode, but the
/// contract only requires the production output to be generic, not that the
/// strings be absent from the binary.
fn description(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::Prod => {
            "Something went wrong in a production build. Error details are stripped from production bundles."
        }
        ErrorCode::Unknown => "An unknown error occurred inside the editor framework.",
        ErrorCode::Custom => "This is a custom error, possibly thrown by an external library.",
        ErrorCode::Internal => {
            "An internal error occurred. This is probably a bug in the framework itself."
        }
        ErrorCode::Mutation => {
            "Attempted to mutate an immutable value. Framework-owned state must be updated through commands."
        }
        ErrorCode::ManagerPhaseError => {
            "This method may not be called during the current phase of the manager lifecycle."
        }
        ErrorCode::InvalidManagerArguments => {
            "Invalid arguments were passed when creating the editor manager."
        }
        ErrorCode::MissingRequiredExtension => {
            "An extension required by this operation is not registered with the manager."
        }
        ErrorCode::InvalidExtension => "The provided value is not a valid extension.",
        ErrorCode::InvalidPreset => "The provided value is not a valid preset.",
        ErrorCode::InvalidCommandArguments => {
            "The arguments passed to the command do not match its declared signature."
        }
        ErrorCode::DuplicateCommandNames => {
            "Two extensions attempted to register a command under the same name."
        }
        ErrorCode::DuplicateHelperNames => {
            "Two extensions attempted to register a helper under the same name."
        }
        ErrorCode::NonChainableCommand => {
            "This command cannot take part in a chain because it does not support chaining."
        }
        ErrorCode::HelpersCalledInOuterScope => {
            "Helpers may only be called from within editor event handlers and commands."
        }
        ErrorCode::Schema => "The editor schema is inconsistent with the registered extensions.",
        ErrorCode::InvalidName => {
            "Names must consist of lowercase letters only, without spaces or punctuation."
        }
        ErrorCode::InvalidContent => {
            "The content passed to the editor could not be converted into a valid document."
        }
        ErrorCode::UiProviderContext => {
            "A UI hook was used outside of the editor provider component."
        }
        ErrorCode::UiEditorView => {
            "The editor view was accessed before it was attached to the UI."
        }
    }
}

// ============================================================================
// MESSAGE TABLE
// ============================================================================

/// Immutable mapping from error code to developer-facing description.
///
/// Built once per mode and never mutated afterward. In production mode the
/// table is empty so resolved messages leak no internal detail.
#[derive(Debug)]
pub struct ErrorMessageTable {
    entries: HashMap<ErrorCode, &'static str>,
}

impl ErrorMessageTable {
    /// Build the table for the given runtime mode
    pub fn for_mode(mode: RuntimeMode) -> Self {
        let mut entries = HashMap::new();

        if !mode.is_production() {
            for &code in ErrorCode::ALL {
                entries.insert(code, description(code));
            }
        }

        Self { entries }
    }

    pub fn get(&self, code: ErrorCode) -> Option<&'static str> {
        self.entries.get(&code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Render the full message for a code.
    ///
    /// The description (when registered) and the extra detail (when supplied)
    /// each end with a blank line; the documentation link always closes the
    /// message. Missing table entries simply contribute no prefix.
    pub fn resolve(&self, code: ErrorCode, extra: Option<&str>) -> String {
        let mut message = String::new();

        if let Some(description) = self.get(code) {
            message.push_str(description);
            message.push_str("\n\n");
        }

        if let Some(extra) = extra {
            message.push_str(extra);
            message.push_str("\n\n");
        }

        message.push_str("For more information visit ");
        message.push_str(ERRORS_DOC_URL);
        message.push('#');
        message.push_str(code.as_str());

        message
    }
}

// ============================================================================
// PROCESS-WIDE TABLE
// ============================================================================

static MESSAGE_TABLE: OnceLock<ErrorMessageTable> = OnceLock::new();

/// Get the process-wide message table, built once from the current mode
pub(crate) fn global_table() -> &'static ErrorMessageTable {
    MESSAGE_TABLE.get_or_init(|| ErrorMessageTable::for_mode(current_mode()))
}

/// Render the message for a code using the process-wide table
pub fn resolve_message(code: ErrorCode, extra: Option<&str>) -> String {
    global_table().resolve(code, extra)
}
