use crate::element::{Element, Renderable, Tag};

/// An `a` element with link text and an `href`.
#[derive(Debug)]
pub struct Anchor {
    anchor: Element,
}

impl Anchor {
    pub fn new(title: &str, href: &str) -> Self {
        let anchor = Element::new(Tag::A)
            .with_attribute("href", href)
            .with_text(title);
        Self { anchor }
    }

    pub fn set_title(&mut self, title: &str) {
        self.anchor.set_text(title);
    }

    pub fn set_href(&mut self, href: &str) {
        self.anchor.set_attribute("href", href);
    }

    pub fn href(&self) -> Option<&str> {
        self.anchor.attribute("href")
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.anchor
    }
}

impl Renderable for Anchor {
    fn top_level_element(&self) -> &Element {
        &self.anchor
    }
}
