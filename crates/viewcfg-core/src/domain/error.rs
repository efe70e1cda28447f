// ============================================================================
// domain/error.rs - CONFIGURATION ERROR DOMAIN
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// None of them is retryable: a configuration either resolves completely or
/// application startup is aborted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("The attribute '{attribute}' is required for the element '{element}' under '{parent}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
        parent: &'static str,
    },

    #[error("Invalid engine type name '{value}': type names must not be blank")]
    InvalidEngineTypeName { value: String },

    #[error("The type '{type_name}' could not be loaded")]
    UnresolvableEngineType { type_name: String },

    #[error("View root '{path}' cannot be made absolute: {reason}")]
    InvalidViewPathRoot { path: PathBuf, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error(
        "View folder configured could not be found: {path}. Check (or add) a viewPathRoot attribute to the viewEngines node on the configuration"
    )]
    ViewFolderNotFound { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingAttribute {
                element,
                attribute,
                parent,
            } => vec![
                format!("Add a '{attribute}' attribute to every <{element}> under <{parent}>"),
                format!("Example: <{element} {attribute}=\"Namespace.MyViewEngine\" />"),
            ],
            Self::InvalidEngineTypeName { .. } => vec![
                "Engine types are fully-qualified type names".into(),
                "Example: Castle.MonoRail.Views.Brail.BooViewEngine".into(),
            ],
            Self::UnresolvableEngineType { type_name } => vec![
                format!("No registered view engine is named '{type_name}'"),
                "Try: viewcfg engines to see the registered engines".into(),
                "Register custom engines under [registry] extra_engines in the viewcfg config"
                    .into(),
            ],
            Self::InvalidViewPathRoot { .. } => vec![
                "Pass an absolute base directory".into(),
                "Or set viewPathRoot to an absolute path".into(),
            ],
            Self::ViewFolderNotFound { path } => vec![
                format!("Create the directory: {}", path.display()),
                "Or point the viewPathRoot attribute at an existing directory".into(),
                "Relative roots are resolved against the application base directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingAttribute { .. }
            | Self::InvalidEngineTypeName { .. }
            | Self::UnresolvableEngineType { .. }
            | Self::InvalidViewPathRoot { .. } => ErrorCategory::Configuration,
            Self::ViewFolderNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    NotFound,
}
