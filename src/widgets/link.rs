use crate::element::{Element, Renderable, Tag};

/// A `link` element, usually pointing at a stylesheet.
#[derive(Debug)]
pub struct StylesheetLink {
    link: Element,
}

impl StylesheetLink {
    /// Link to `href` with the given relationship (`stylesheet`, `icon`, ...).
    pub fn new(href: &str, rel: &str) -> Self {
        let link = Element::new(Tag::Link)
            .with_attribute("href", href)
            .with_attribute("rel", rel);
        Self { link }
    }

    pub fn stylesheet(href: &str) -> Self {
        Self::new(href, "stylesheet")
    }

    pub fn set_href(&mut self, href: &str) {
        self.link.set_attribute("href", href);
    }

    pub fn set_rel(&mut self, rel: &str) {
        self.link.set_attribute("rel", rel);
    }
}

impl Renderable for StylesheetLink {
    fn top_level_element(&self) -> &Element {
        &self.link
    }
}
