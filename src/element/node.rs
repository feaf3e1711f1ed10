//! Element nodes and the recursive serializer.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use super::escape::{escape_attribute, escape_html, percent_encode_text};
use super::tag::Tag;
use crate::error::Result;

/// Anything that can be placed in an element tree.
///
/// Wrapper types (widgets, composites) implement this by handing out the one
/// root [`Element`] they manage. The serializer only ever walks a tree through
/// this trait.
pub trait Renderable: fmt::Debug + Send {
    /// The root element of this renderable.
    fn top_level_element(&self) -> &Element;

    /// Render the root element and everything below it.
    fn render(&self) -> String {
        self.top_level_element().render()
    }
}

/// A mutable node in an element tree.
///
/// Content set on a void element (text, raw fragments, children) is silently
/// dropped. Attributes are kept for every kind and serialize in ascending key
/// order. Attribute names that could end the opening tag early are refused.
#[derive(Debug)]
pub struct Element {
    tag: Tag,
    attributes: BTreeMap<String, String>,
    text: String,
    fragments: Vec<String>,
    children: Vec<Box<dyn Renderable>>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: BTreeMap::new(),
            text: String::new(),
            fragments: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty element from a tag name.
    ///
    /// Fails with [`Error::UnknownTagKind`](crate::Error::UnknownTagKind) for
    /// names outside the catalog.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_void(&self) -> bool {
        self.tag.is_void()
    }

    /// Set an attribute, replacing any previous value for the key.
    ///
    /// Names that are empty or contain whitespace, control characters, quotes,
    /// `<`, `>`, `/` or `=` are ignored. Values are escaped when rendered.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if !is_attribute_name(&key) {
            warn!(tag = self.tag.name(), key = %key, "ignoring invalid attribute name");
            return;
        }
        self.attributes.insert(key, value.into());
    }

    /// Remove an attribute, returning its old value.
    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.attributes.remove(key)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attributes in serialization order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replace the text payload with an HTML-escaped copy of `text`.
    pub fn set_text(&mut self, text: &str) {
        if !self.is_void() {
            self.text = escape_html(text).into_owned();
        }
    }

    /// Replace the text payload with a percent-encoded copy of `text`.
    pub fn set_percent_encoded_text(&mut self, text: &str) {
        if !self.is_void() {
            self.text = percent_encode_text(text);
        }
    }

    /// The stored (already escaped) text payload.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append a child. The child is owned by this element from now on.
    pub fn append_child(&mut self, child: impl Renderable + 'static) {
        self.push_child(Box::new(child));
    }

    /// Append an already boxed child.
    pub fn push_child(&mut self, child: Box<dyn Renderable>) {
        if !self.is_void() {
            self.children.push(child);
        }
    }

    pub fn children(&self) -> &[Box<dyn Renderable>] {
        &self.children
    }

    /// Append a pre-rendered markup fragment, emitted verbatim before any
    /// children.
    pub fn inject_raw(&mut self, fragment: impl Into<String>) {
        if !self.is_void() {
            self.fragments.push(fragment.into());
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(mut self, child: impl Renderable + 'static) -> Self {
        self.append_child(child);
        self
    }

    pub fn with_raw(mut self, fragment: impl Into<String>) -> Self {
        self.inject_raw(fragment);
        self
    }

    /// The opening tag for the current attributes.
    ///
    /// Every attribute pair is followed by one space, including the last:
    /// `<div style="color:orange;" >`. Void elements close with `/>`.
    pub fn start_tag(&self) -> String {
        let mut out = String::new();
        self.write_start_tag(&mut out);
        out
    }

    /// The closing tag, empty for void elements.
    pub fn end_tag(&self) -> String {
        if self.is_void() {
            String::new()
        } else {
            format!("</{}>", self.tag.name())
        }
    }

    /// Serialize this element and its subtree.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, &[]);
        out
    }

    /// Serialize with `extra` fragments emitted after this element's own
    /// fragments and before its children. The element is not modified.
    pub(crate) fn render_with_fragments(&self, extra: &[String]) -> String {
        let mut out = String::new();
        self.render_into(&mut out, extra);
        out
    }

    fn render_into(&self, out: &mut String, extra: &[String]) {
        self.write_start_tag(out);
        if self.is_void() {
            return;
        }

        out.push_str(&self.text);
        for fragment in self.fragments.iter().chain(extra) {
            out.push_str(fragment);
        }
        for child in &self.children {
            child.top_level_element().render_into(out, &[]);
        }

        out.push_str("</");
        out.push_str(self.tag.name());
        out.push('>');
    }

    fn write_start_tag(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag.name());
        if !self.attributes.is_empty() {
            out.push(' ');
            for (key, value) in &self.attributes {
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_attribute(value));
                out.push_str("\" ");
            }
        }
        out.push_str(if self.is_void() { "/>" } else { ">" });
    }
}

fn is_attribute_name(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

impl Renderable for Element {
    fn top_level_element(&self) -> &Element {
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Tag> for Element {
    fn from(tag: Tag) -> Self {
        Element::new(tag)
    }
}
