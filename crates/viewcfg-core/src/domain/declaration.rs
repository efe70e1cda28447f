//! Shape detection for the view-engine section.
//!
//! A section declares its engines in one of two shapes:
//!
//! ```xml
//! <viewEngines viewPathRoot="views">
//!   <add type="Ns.BooViewEngine" xhtml="true" />
//! </viewEngines>
//!
//! <viewEngine viewPathRoot="views" xhtmlRendering="true" customEngine="Ns.Engine" />
//! ```
//!
//! [`EngineDeclaration::detect`] decides the shape once. The multi-engine
//! block always wins; the two shapes are never merged. Detection itself
//! never fails: attribute validation happens when the declaration is
//! projected into a configuration.

use crate::domain::{
    document::ConfigElement,
    value_objects::{DEFAULT_VIEW_PATH_ROOT, MarkupVariant},
};

pub const MULTI_ENGINE_ELEMENT: &str = "viewEngines";
pub const LEGACY_ENGINE_ELEMENT: &str = "viewEngine";
pub const ENGINE_ENTRY_ELEMENT: &str = "add";

/// The engine declaration found in a configuration section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineDeclaration {
    /// `<viewEngines>` with zero or more `<add>` entries.
    Multiple(MultiEngineBlock),
    /// A single `<viewEngine>` element.
    Legacy(LegacyEngineBlock),
    /// Neither element exists.
    Absent,
}

impl EngineDeclaration {
    /// Inspect the direct children of `section`.
    pub fn detect(section: &ConfigElement) -> Self {
        if let Some(block) = section.child(MULTI_ENGINE_ELEMENT) {
            return Self::Multiple(MultiEngineBlock::from_element(block));
        }
        if let Some(block) = section.child(LEGACY_ENGINE_ELEMENT) {
            return Self::Legacy(LegacyEngineBlock::from_element(block));
        }
        Self::Absent
    }

    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Multiple(_) => "multiple",
            Self::Legacy(_) => "legacy",
            Self::Absent => "absent",
        }
    }
}

/// Contents of a `<viewEngines>` block. An empty `viewPathRoot` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiEngineBlock {
    pub view_path_root: Option<String>,
    pub entries: Vec<EngineEntry>,
}

impl MultiEngineBlock {
    fn from_element(element: &ConfigElement) -> Self {
        Self {
            view_path_root: element.non_empty_attribute("viewPathRoot").map(str::to_owned),
            entries: element
                .children_named(ENGINE_ENTRY_ELEMENT)
                .map(EngineEntry::from_element)
                .collect(),
        }
    }

    /// The declared root, or `"views"` when absent or empty.
    pub fn view_path_root_or_default(&self) -> &str {
        self.view_path_root
            .as_deref()
            .unwrap_or(DEFAULT_VIEW_PATH_ROOT)
    }
}

/// Contents of one `<add>` entry. An empty `type` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineEntry {
    pub type_name: Option<String>,
    pub xhtml: Option<String>,
}

impl EngineEntry {
    fn from_element(element: &ConfigElement) -> Self {
        Self {
            type_name: element.non_empty_attribute("type").map(str::to_owned),
            xhtml: element.attribute("xhtml").map(str::to_owned),
        }
    }

    /// The `type` attribute, `None` when absent or empty.
    pub fn declared_type(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// XHTML only for the exact value `"true"`.
    pub fn markup(&self) -> MarkupVariant {
        MarkupVariant::from_xhtml_flag(self.xhtml.as_deref() == Some("true"))
    }
}

/// Raw contents of a legacy `<viewEngine>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyEngineBlock {
    pub view_path_root: Option<String>,
    pub xhtml_rendering: Option<String>,
    pub custom_engine: Option<String>,
}

impl LegacyEngineBlock {
    fn from_element(element: &ConfigElement) -> Self {
        Self {
            view_path_root: element.attribute("viewPathRoot").map(str::to_owned),
            xhtml_rendering: element.attribute("xhtmlRendering").map(str::to_owned),
            custom_engine: element.attribute("customEngine").map(str::to_owned),
        }
    }

    /// The declared root verbatim (an empty value is kept), or `"views"`.
    pub fn view_path_root_or_default(&self) -> &str {
        self.view_path_root
            .as_deref()
            .unwrap_or(DEFAULT_VIEW_PATH_ROOT)
    }

    /// XHTML when `xhtmlRendering` equals `"true"` ignoring ASCII case.
    pub fn markup(&self) -> MarkupVariant {
        MarkupVariant::from_xhtml_flag(
            self.xhtml_rendering
                .as_deref()
                .is_some_and(|v| v.eq_ignore_ascii_case("true")),
        )
    }
}
