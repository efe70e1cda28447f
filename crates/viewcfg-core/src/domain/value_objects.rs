//! Domain value objects: MarkupVariant, EngineTypeName.
//!
//! These are pure value types with equality-by-value and no identity. They
//! define the types, their string representations, and their parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type name of the engine registered when a configuration declares none.
pub const DEFAULT_ENGINE_TYPE: &str = "Castle.MonoRail.Framework.Views.Aspx.WebFormsViewEngine";

/// View root used when the configuration does not name one.
pub const DEFAULT_VIEW_PATH_ROOT: &str = "views";

// ── MarkupVariant ─────────────────────────────────────────────────────────────

/// The markup flavour a view engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupVariant {
    Xhtml,
    #[default]
    Html,
}

impl MarkupVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Xhtml => "xhtml",
            Self::Html => "html",
        }
    }

    /// Map an `xhtml`-style boolean flag onto a variant.
    pub const fn from_xhtml_flag(xhtml: bool) -> Self {
        if xhtml { Self::Xhtml } else { Self::Html }
    }

    pub const fn is_xhtml(self) -> bool {
        matches!(self, Self::Xhtml)
    }
}

impl fmt::Display for MarkupVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EngineTypeName ────────────────────────────────────────────────────────────

/// A fully-qualified view engine type name.
///
/// Invariant: never blank, no surrounding whitespace. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EngineTypeName(String);

impl EngineTypeName {
    /// Fallible constructor.
    pub fn try_new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = name.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidEngineTypeName {
                value: raw.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The engine registered when nothing else is configured.
    pub fn default_engine() -> Self {
        Self(DEFAULT_ENGINE_TYPE.to_owned())
    }

    /// The type name without an assembly qualifier.
    ///
    /// `"Ns.Engine, Ns.Assembly"` yields `"Ns.Engine"`.
    pub fn type_part(&self) -> &str {
        match self.0.split_once(',') {
            Some((ty, _)) => ty.trim_end(),
            None => &self.0,
        }
    }

    /// The trailing segment of the type name (`"Ns.Engine"` yields `"Engine"`).
    pub fn short_name(&self) -> &str {
        let ty = self.type_part();
        ty.rsplit('.').next().unwrap_or(ty)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.type_part() == DEFAULT_ENGINE_TYPE
    }
}

impl fmt::Display for EngineTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EngineTypeName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for EngineTypeName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<EngineTypeName> for String {
    fn from(name: EngineTypeName) -> Self {
        name.0
    }
}

impl AsRef<str> for EngineTypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
