//! Runtime mode configuration
//!
//! The runtime mode decides how much error detail the framework exposes.
//! It is read once per process, either from the environment or through an
//! explicit initialization call, and never changes afterward.

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;

/// Runtime modes recognized by the framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Production => "production",
        }
    }

    /// Whether descriptive error detail should be suppressed
    pub fn is_production(&self) -> bool {
        matches!(self, RuntimeMode::Production)
    }
}

impl Default for RuntimeMode {
    fn default() -> Self {
        env::var(env_vars::RUNTIME_MODE)
            .ok()
            .and_then(|v| parse_runtime_mode(&v))
            .unwrap_or(RuntimeMode::Development)
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse runtime mode from string (used for environment variables)
fn parse_runtime_mode(mode: &str) -> Option<RuntimeMode> {
    match mode.to_lowercase().as_str() {
        "development" | "dev" => Some(RuntimeMode::Development),
        "production" | "prod" => Some(RuntimeMode::Production),
        _ => None,
    }
}

// ============================================================================
// PROCESS-WIDE MODE STORAGE
// ============================================================================

static RUNTIME_MODE: OnceLock<RuntimeMode> = OnceLock::new();

/// Set the process-wide runtime mode explicitly.
///
/// Embedders call this before any errors are constructed. When it is never
/// called, the mode falls back to the environment-derived default on first
/// use. Fails if the mode was already decided.
///
/// ```
/// use scribe_errors::{current_mode, init_runtime_mode, RuntimeMode};
///
/// init_runtime_mode(RuntimeMode::Production).unwrap();
/// assert_eq!(current_mode(), RuntimeMode::Production);
/// assert!(init_runtime_mode(RuntimeMode::Development).is_err());
/// ```
pub fn init_runtime_mode(mode: RuntimeMode) -> Result<(), String> {
    RUNTIME_MODE
        .set(mode)
        .map_err(|_| "Runtime mode already initialized".to_string())
}

/// Get the process-wide runtime mode (with fallback to the default)
pub fn current_mode() -> RuntimeMode {
    *RUNTIME_MODE.get_or_init(RuntimeMode::default)
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const RUNTIME_MODE: &str = "SCRIBE_RUNTIME_MODE";
}
