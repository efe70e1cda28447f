//! Additional template sources.

use serde::Serialize;

use crate::domain::document::ConfigElement;

const ADDITIONAL_SOURCES: &str = "additionalSources";

/// Templates embedded in an assembly, addressed by namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssemblySourceInfo {
    assembly_name: String,
    namespace: String,
}

impl AssemblySourceInfo {
    pub fn new(assembly_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            assembly_name: assembly_name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn assembly_name(&self) -> &str {
        &self.assembly_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

/// Sources collected from every `additionalSources` block of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdditionalSources {
    pub assemblies: Vec<AssemblySourceInfo>,
    pub paths: Vec<String>,
}

impl AdditionalSources {
    /// Walk the whole tree below `root` and collect `assembly` and `path`
    /// declarations.
    ///
    /// Blocks may sit under any element. Entries keep document order and are
    /// never deduplicated; a missing attribute reads as an empty string.
    pub fn collect(root: &ConfigElement) -> Self {
        let mut sources = Self::default();

        for block in root.descendants_named(ADDITIONAL_SOURCES) {
            for entry in block.children() {
                match entry.name() {
                    "assembly" => sources.assemblies.push(AssemblySourceInfo::new(
                        entry.attribute("name").unwrap_or_default(),
                        entry.attribute("namespace").unwrap_or_default(),
                    )),
                    "path" => sources
                        .paths
                        .push(entry.attribute("location").unwrap_or_default().to_owned()),
                    _ => {}
                }
            }
        }

        sources
    }
}
