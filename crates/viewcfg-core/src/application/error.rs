//! Application layer errors.
//!
//! These errors represent failures in orchestration and adapters, not in
//! configuration content. Content errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The configuration document could not be read or parsed.
    #[error("Failed to load configuration document {}: {reason}", display_origin(.origin))]
    DocumentLoad {
        origin: Option<PathBuf>,
        reason: String,
    },

    /// The document has no element to resolve against.
    #[error("Configuration section '{name}' not found in document")]
    SectionNotFound { name: String },

    /// Registry access failed (lock poisoned).
    #[error("Engine registry error")]
    RegistryLockError,
}

fn display_origin(origin: &Option<PathBuf>) -> String {
    match origin {
        Some(path) => format!("'{}'", path.display()),
        None => "<inline>".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DocumentLoad { origin, .. } => {
                let mut out = vec!["Check that the document is well-formed XML".into()];
                if let Some(path) = origin {
                    out.push(format!("Check that {} exists and is readable", path.display()));
                }
                out
            }
            Self::SectionNotFound { name } => vec![
                format!("Add a <{name}> element to the document"),
                "Or omit --section to resolve against the root element".into(),
            ],
            Self::RegistryLockError => vec![
                "The engine registry is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DocumentLoad { .. } => ErrorCategory::Validation,
            Self::SectionNotFound { .. } => ErrorCategory::NotFound,
            Self::RegistryLockError => ErrorCategory::Internal,
        }
    }
}
