use serde::Serialize;

use crate::domain::value_objects::{EngineTypeName, MarkupVariant};

/// One view engine the templating subsystem should instantiate.
///
/// Immutable once created; lives as long as the resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ViewEngineRegistration {
    engine_type: EngineTypeName,
    markup: MarkupVariant,
}

impl ViewEngineRegistration {
    pub fn new(engine_type: EngineTypeName, markup: MarkupVariant) -> Self {
        Self {
            engine_type,
            markup,
        }
    }

    /// The fallback registration: the WebForms engine producing HTML.
    pub fn default_engine() -> Self {
        Self::new(EngineTypeName::default_engine(), MarkupVariant::Html)
    }

    pub fn engine_type(&self) -> &EngineTypeName {
        &self.engine_type
    }

    pub fn markup(&self) -> MarkupVariant {
        self.markup
    }

    pub fn is_xhtml(&self) -> bool {
        self.markup.is_xhtml()
    }
}
