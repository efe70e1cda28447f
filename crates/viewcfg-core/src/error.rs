//! Unified error handling for viewcfg Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for viewcfg Core operations.
#[derive(Debug, Error, Clone)]
pub enum ViewCfgError {
    /// Configuration content errors and the missing view folder.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading, adapters).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ViewCfgError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in viewcfg".into(),
                "Please report this issue at: https://github.com/cosecruz/viewcfg/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Missing/invalid attribute, unresolvable engine type or unusable view root.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(
                DomainError::MissingAttribute { .. }
                    | DomainError::InvalidEngineTypeName { .. }
                    | DomainError::UnresolvableEngineType { .. }
                    | DomainError::InvalidViewPathRoot { .. }
            )
        )
    }

    /// The resolved view root does not exist.
    pub fn is_view_folder_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::ViewFolderNotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ViewCfgResult<T> = Result<T, ViewCfgError>;
