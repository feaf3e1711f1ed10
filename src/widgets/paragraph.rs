use crate::element::{Element, Renderable, Tag};

/// A `p` element holding text.
#[derive(Debug)]
pub struct Paragraph {
    p: Element,
}

impl Paragraph {
    pub fn new(text: &str) -> Self {
        Self {
            p: Element::new(Tag::P).with_text(text),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.p.set_text(text);
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.p
    }
}

impl Renderable for Paragraph {
    fn top_level_element(&self) -> &Element {
        &self.p
    }
}
