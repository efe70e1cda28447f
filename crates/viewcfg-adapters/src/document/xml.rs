//! XML document loader.
//!
//! Reads a configuration document with `quick-xml` and builds the
//! [`ConfigElement`] tree the resolver works on. Only elements and their
//! attributes are kept; text, comments, CDATA, declarations and processing
//! instructions are skipped. Attribute values are unescaped.

use std::{
    fs,
    path::{Path, PathBuf},
};

use quick_xml::{
    events::{BytesStart, Event},
    reader::Reader,
};
use tracing::{debug, instrument};
use viewcfg_core::{application::ApplicationError, domain::ConfigElement, error::ViewCfgResult};

/// Parses XML configuration documents into [`ConfigElement`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDocumentLoader;

impl XmlDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the file at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(&self, path: impl AsRef<Path>) -> ViewCfgResult<ConfigElement> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::DocumentLoad {
            origin: Some(path.to_path_buf()),
            reason: e.to_string(),
        })?;

        let root = parse_document(&text, Some(path))?;
        debug!(root = root.name(), "loaded configuration document");
        Ok(root)
    }

    /// Parse an in-memory document.
    pub fn parse(&self, text: &str) -> ViewCfgResult<ConfigElement> {
        Ok(parse_document(text, None)?)
    }
}

fn parse_document(text: &str, origin: Option<&Path>) -> Result<ConfigElement, ApplicationError> {
    let fail = |reason: String| ApplicationError::DocumentLoad {
        origin: origin.map(PathBuf::from),
        reason,
    };

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut open: Vec<ConfigElement> = Vec::new();
    let mut root: Option<ConfigElement> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            fail(format!(
                "malformed XML at byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(start) => open.push(element_from(&start).map_err(fail)?),
            Event::Empty(start) => {
                let element = element_from(&start).map_err(fail)?;
                attach(&mut open, &mut root, element).map_err(fail)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| fail("unexpected closing tag".into()))?;
                attach(&mut open, &mut root, element).map_err(fail)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(fail(format!("element <{}> is never closed", unclosed.name())));
    }

    root.ok_or_else(|| fail("document has no root element".into()))
}

/// Attach a finished element to its parent, or make it the root.
fn attach(
    open: &mut [ConfigElement],
    root: &mut Option<ConfigElement>,
    element: ConfigElement,
) -> Result<(), String> {
    if let Some(parent) = open.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(format!(
            "second root element <{}>; a document has exactly one root",
            element.name()
        ));
    }
    *root = Some(element);
    Ok(())
}

fn element_from(start: &BytesStart<'_>) -> Result<ConfigElement, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = ConfigElement::new(name);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| format!("invalid attribute: {e}"))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| format!("invalid value for attribute '{key}': {e}"))?;
        element.set_attribute(key, value.into_owned());
    }

    Ok(element)
}
