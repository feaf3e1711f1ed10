//! A closure-based builder DSL on top of [`Element`] and [`Page`].
//!
//! ```
//! use trellis::sml::{self, ElementExt};
//!
//! let page = sml::page("Home", |_head, header, section, _footer| {
//!     header.a("Docs", "/docs", "nav", "", |_| {});
//!     section.address("221B Baker Street", "", "contact", |_| {});
//! });
//!
//! let html = page.render();
//! assert!(html.contains(r#"<header><a class="nav" href="/docs" >Docs</a></header>"#));
//! ```

use crate::element::{Element, Tag};
use crate::page::Page;
use crate::widgets::Anchor;

/// Create a page and populate its regions in one closure.
///
/// The closure receives `head`, `header`, `section` and `footer`, in that order.
pub fn page<F>(title: &str, build: F) -> Page
where
    F: FnOnce(&mut Element, &mut Element, &mut Element, &mut Element),
{
    let mut page = Page::new(title);
    build(
        &mut page.head,
        &mut page.header,
        &mut page.section,
        &mut page.footer,
    );
    page
}

/// Child-building shortcuts for [`Element`].
///
/// Empty `class` or `id` arguments are left off the element. The closure runs
/// on the new child before it is appended.
pub trait ElementExt {
    /// Append an anchor.
    fn a<F>(&mut self, text: &str, href: &str, class: &str, id: &str, build: F)
    where
        F: FnOnce(&mut Element);

    /// Append an abbreviation whose `title` is the full description.
    fn abbr<F>(&mut self, text: &str, title: &str, class: &str, id: &str, build: F)
    where
        F: FnOnce(&mut Element);

    /// Append an address block.
    fn address<F>(&mut self, text: &str, class: &str, id: &str, build: F)
    where
        F: FnOnce(&mut Element);
}

impl ElementExt for Element {
    fn a<F>(&mut self, text: &str, href: &str, class: &str, id: &str, build: F)
    where
        F: FnOnce(&mut Element),
    {
        let mut anchor = Anchor::new(text, href);
        let element = anchor.element_mut();
        set_class_and_id(element, class, id);
        build(element);
        self.append_child(anchor);
    }

    fn abbr<F>(&mut self, text: &str, title: &str, class: &str, id: &str, build: F)
    where
        F: FnOnce(&mut Element),
    {
        let mut abbr = Element::new(Tag::Abbr)
            .with_text(text)
            .with_attribute("title", title);
        set_class_and_id(&mut abbr, class, id);
        build(&mut abbr);
        self.append_child(abbr);
    }

    fn address<F>(&mut self, text: &str, class: &str, id: &str, build: F)
    where
        F: FnOnce(&mut Element),
    {
        let mut address = Element::new(Tag::Address).with_text(text);
        set_class_and_id(&mut address, class, id);
        build(&mut address);
        self.append_child(address);
    }
}

fn set_class_and_id(element: &mut Element, class: &str, id: &str) {
    if !class.is_empty() {
        element.set_attribute("class", class);
    }
    if !id.is_empty() {
        element.set_attribute("id", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_regions_in_order() {
        let page = page("Order", |head, header, section, footer| {
            head.inject_raw("<meta charset=\"utf-8\"/>");
            header.set_text("h");
            section.set_text("s");
            footer.set_text("f");
        });

        assert_eq!(
            page.render(),
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"/><title>Order</title></head>\
             <body><header>h</header><section>s</section><footer>f</footer></body></html>"
        );
    }

    #[test]
    fn test_a_with_nested_children() {
        let mut div = Element::new(Tag::Div);
        div.a("Home", "/", "", "home", |a| {
            a.append_child(Element::new(Tag::Img).with_attribute("src", "logo.png"));
        });

        assert_eq!(
            div.render(),
            r#"<div><a href="/" id="home" >Home<img src="logo.png" /></a></div>"#
        );
    }

    #[test]
    fn test_abbr() {
        let mut p = Element::new(Tag::P);
        p.abbr("HTML", "HyperText Markup Language", "term", "", |_| {});

        assert_eq!(
            p.render(),
            r#"<p><abbr class="term" title="HyperText Markup Language" >HTML</abbr></p>"#
        );
    }

    #[test]
    fn test_address_on_void_parent_is_dropped() {
        let mut br = Element::new(Tag::Br);
        br.address("nowhere", "", "", |_| {});
        assert_eq!(br.render(), "<br/>");
    }
}
