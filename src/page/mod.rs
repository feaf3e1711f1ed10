//! Whole-document assembly.
//!
//! A [`Page`] owns the four top-level regions of a document (`head`,
//! `header`, `section`, `footer`) and a list of [`Dependency`] imports.
//! Rendering produces:
//!
//! ```text
//! <!DOCTYPE html><html>
//!   <head> own fragments, markup dependency tags, children </head>
//!   <body> header section footer script dependency tags </body>
//! </html>
//! ```
//!
//! (without the whitespace shown here). Dependency tags are emitted in import
//! order with no de-duplication.

#[cfg(feature = "cli")]
mod config;
mod dependency;

#[cfg(feature = "cli")]
pub use config::PageConfig;
pub use dependency::{Dependency, DependencyKind};

use tracing::debug;

use crate::element::{Element, Tag};
use crate::error::Result;
use crate::export::ViewSink;

/// A web page with a head, header, section and footer.
#[derive(Debug)]
pub struct Page {
    pub head: Element,
    pub header: Element,
    pub section: Element,
    pub footer: Element,
    dependencies: Vec<Dependency>,
}

impl Page {
    /// Create a page whose head holds a `<title>` element.
    pub fn new(title: &str) -> Self {
        let mut head = Element::new(Tag::Head);
        head.append_child(Element::new(Tag::Title).with_text(title));
        Self::from_parts(
            head,
            Element::new(Tag::Header),
            Element::new(Tag::Section),
            Element::new(Tag::Footer),
        )
    }

    /// Create a page from existing region elements.
    pub fn from_parts(head: Element, header: Element, section: Element, footer: Element) -> Self {
        Self {
            head,
            header,
            section,
            footer,
            dependencies: Vec::new(),
        }
    }

    /// Load a dependency into the page.
    pub fn import(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Render the complete document. The page is left unchanged, so repeated
    /// calls give identical output.
    pub fn render(&self) -> String {
        let mut markup = Vec::new();
        let mut scripts = Vec::new();
        for dependency in &self.dependencies {
            for (kind, tag) in dependency.html_tags() {
                match kind {
                    DependencyKind::Markup => markup.push(tag),
                    DependencyKind::Script => scripts.push(tag),
                }
            }
        }
        debug!(
            dependencies = self.dependencies.len(),
            markup = markup.len(),
            scripts = scripts.len(),
            "assembling page"
        );

        let mut html = String::from("<!DOCTYPE html><html>");
        html.push_str(&self.head.render_with_fragments(&markup));
        html.push_str("<body>");
        html.push_str(&self.header.render());
        html.push_str(&self.section.render());
        html.push_str(&self.footer.render());
        for tag in &scripts {
            html.push_str(tag);
        }
        html.push_str("</body></html>");
        html
    }

    /// Render the page and hand it to `sink` under `name`.
    pub fn save(&self, sink: &impl ViewSink, name: &str) -> Result<()> {
        sink.write_view(name, &self.render())
    }
}
