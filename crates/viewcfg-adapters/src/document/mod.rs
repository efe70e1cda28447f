//! Configuration document loaders.

mod xml;

pub use xml::XmlDocumentLoader;
