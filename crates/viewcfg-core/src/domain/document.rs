//! Structured configuration tree.
//!
//! [`ConfigElement`] is the format-neutral shape every document loader
//! produces: a named element with ordered attributes and ordered children.
//! Lookups follow element-name equality only; namespaces and text content
//! are not modelled.

use std::slice;

/// One element of a configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<ConfigElement>,
}

impl ConfigElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter. A repeated name replaces the earlier value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: ConfigElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn push_child(&mut self, child: ConfigElement) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, `None` when the attribute is absent.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value, treating an empty value the same as an absent one.
    pub fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).filter(|v| !v.is_empty())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[ConfigElement] {
        &self.children
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&ConfigElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ConfigElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Every element below this one, depth-first in document order.
    /// The element itself is not included.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Descendants with the given name, in document order.
    pub fn descendants_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a ConfigElement> {
        self.descendants().filter(move |e| e.name == name)
    }

    /// This element if it has the given name, otherwise the first descendant
    /// that does.
    pub fn find(&self, name: &str) -> Option<&ConfigElement> {
        if self.name == name {
            return Some(self);
        }
        self.descendants().find(|e| e.name == name)
    }
}

/// Pre-order iterator over the elements below a [`ConfigElement`].
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, ConfigElement>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ConfigElement;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(element) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConfigElement {
        ConfigElement::new("monorail")
            .with_child(
                ConfigElement::new("controllers")
                    .with_child(ConfigElement::new("assembly").with_attribute("name", "A")),
            )
            .with_child(
                ConfigElement::new("viewEngines")
                    .with_attribute("viewPathRoot", "views")
                    .with_child(ConfigElement::new("add").with_attribute("type", "X"))
                    .with_child(ConfigElement::new("add").with_attribute("type", "Y")),
            )
    }

    #[test]
    fn descendants_walk_in_document_order() {
        let root = sample();
        let names: Vec<&str> = root.descendants().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["controllers", "assembly", "viewEngines", "add", "add"]
        );
    }

    #[test]
    fn descendants_exclude_self() {
        let leaf = ConfigElement::new("leaf");
        assert_eq!(leaf.descendants().count(), 0);
    }

    #[test]
    fn child_lookup_is_direct_only() {
        let root = sample();
        assert!(root.child("viewEngines").is_some());
        assert!(root.child("add").is_none());
        assert_eq!(root.descendants_named("add").count(), 2);
    }

    #[test]
    fn empty_attribute_is_present_but_not_non_empty() {
        let el = ConfigElement::new("viewEngines").with_attribute("viewPathRoot", "");
        assert_eq!(el.attribute("viewPathRoot"), Some(""));
        assert_eq!(el.non_empty_attribute("viewPathRoot"), None);
        assert_eq!(el.attribute("missing"), None);
    }

    #[test]
    fn repeated_attribute_replaces_value() {
        let el = ConfigElement::new("add")
            .with_attribute("type", "A")
            .with_attribute("type", "B");
        assert_eq!(el.attribute("type"), Some("B"));
        assert_eq!(el.attributes().count(), 1);
    }

    #[test]
    fn find_matches_self_then_descendants() {
        let root = sample();
        assert_eq!(root.find("monorail").map(|e| e.name()), Some("monorail"));
        assert_eq!(
            root.find("viewEngines")
                .and_then(|e| e.attribute("viewPathRoot")),
            Some("views")
        );
        assert!(root.find("nothing").is_none());
    }
}
