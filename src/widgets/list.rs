use crate::element::{Element, Renderable, Tag};

/// An `li` element holding either text or children.
#[derive(Debug)]
pub struct ListItem {
    li: Element,
}

impl ListItem {
    pub fn new(text: &str) -> Self {
        Self {
            li: Element::new(Tag::Li).with_text(text),
        }
    }

    pub fn with_children(children: impl IntoIterator<Item = Box<dyn Renderable>>) -> Self {
        let mut li = Element::new(Tag::Li);
        for child in children {
            li.push_child(child);
        }
        Self { li }
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.li
    }
}

impl Renderable for ListItem {
    fn top_level_element(&self) -> &Element {
        &self.li
    }
}

/// An `ol` or `ul` element of list items.
#[derive(Debug)]
pub struct List {
    list: Element,
    len: usize,
}

impl List {
    pub fn ordered() -> Self {
        Self {
            list: Element::new(Tag::Ol),
            len: 0,
        }
    }

    pub fn unordered() -> Self {
        Self {
            list: Element::new(Tag::Ul),
            len: 0,
        }
    }

    /// Append a list item.
    pub fn push_item(&mut self, item: ListItem) {
        self.list.append_child(item);
        self.len += 1;
    }

    /// Append a text item.
    pub fn push_text(&mut self, text: &str) {
        self.push_item(ListItem::new(text));
    }

    /// Wrap `child` in its own list item and append it.
    pub fn push(&mut self, child: impl Renderable + 'static) {
        self.push_item(ListItem::with_children([Box::new(child) as Box<dyn Renderable>]));
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Renderable for List {
    fn top_level_element(&self) -> &Element {
        &self.list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_text_items() {
        let mut ol = List::ordered();
        ol.push_text("first");
        ol.push_text("second");
        assert_eq!(ol.len(), 2);
        assert_eq!(ol.render(), "<ol><li>first</li><li>second</li></ol>");
    }

    #[test]
    fn test_unordered_wraps_children() {
        let mut ul = List::unordered();
        assert!(ul.is_empty());
        ul.push(Element::new(Tag::B).with_text("bold"));
        assert_eq!(ul.render(), "<ul><li><b>bold</b></li></ul>");
    }

    #[test]
    fn test_item_with_children() {
        let item = ListItem::with_children([
            Box::new(Element::new(Tag::Span).with_text("a")) as Box<dyn Renderable>,
            Box::new(Element::new(Tag::Span).with_text("b")),
        ]);
        assert_eq!(item.render(), "<li><span>a</span><span>b</span></li>");
    }
}
