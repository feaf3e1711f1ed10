use super::anchor::Anchor;
use super::list::List;
use crate::element::{Element, Renderable, Tag};

/// A `nav` holding an unordered list of anchors.
#[derive(Debug)]
pub struct Navigation {
    nav: Element,
}

impl Navigation {
    /// Build from `(title, href)` pairs, kept in the given order.
    pub fn new<I, T, H>(items: I) -> Self
    where
        I: IntoIterator<Item = (T, H)>,
        T: AsRef<str>,
        H: AsRef<str>,
    {
        let mut list = List::unordered();
        for (title, href) in items {
            list.push(Anchor::new(title.as_ref(), href.as_ref()));
        }
        Self {
            nav: Element::new(Tag::Nav).with_child(list),
        }
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.nav
    }
}

impl Renderable for Navigation {
    fn top_level_element(&self) -> &Element {
        &self.nav
    }
}
