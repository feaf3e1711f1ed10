//! Serialization contract tests for the element tree.

use std::thread;

use proptest::prelude::*;
use trellis::{Element, Error, Renderable, Tag};

// ============================================================================
// Void vs container
// ============================================================================

#[test]
fn test_every_void_tag_drops_content() {
    for &tag in Tag::ALL.iter().filter(|t| t.is_void()) {
        let mut element = Element::new(tag);
        element.set_text("text");
        element.inject_raw("<b>raw</b>");
        element.append_child(Element::new(Tag::Span));

        assert_eq!(element.render(), format!("<{}/>", tag.name()));
    }
}

#[test]
fn test_void_tag_honors_attributes() {
    let mut img = Element::new(Tag::Img);
    img.set_attribute("src", "x.png");
    img.set_text("ignored");
    img.append_child(Element::new(Tag::P));

    let html = img.render();
    assert_eq!(html, r#"<img src="x.png" />"#);
    assert!(!html.contains("ignored"));
    assert!(!html.contains("<p>"));
}

#[test]
fn test_every_container_tag_renders_pair() {
    for &tag in Tag::ALL.iter().filter(|t| !t.is_void()) {
        let name = tag.name();
        assert_eq!(Element::new(tag).render(), format!("<{name}></{name}>"));
    }
}

#[test]
fn test_container_attributes_trail_a_space() {
    let mut div = Element::new(Tag::Div);
    div.set_attribute("style", "color:orange;");
    div.append_child(Element::new(Tag::P));

    assert_eq!(div.render(), r#"<div style="color:orange;" ><p></p></div>"#);
}

#[test]
fn test_attribute_order_ignores_insertion_order() {
    let forward = Element::new(Tag::Span)
        .with_attribute("a", "1")
        .with_attribute("b", "2");
    let backward = Element::new(Tag::Span)
        .with_attribute("b", "2")
        .with_attribute("a", "1");

    assert_eq!(forward.render(), backward.render());
    assert_eq!(forward.render(), r#"<span a="1" b="2" ></span>"#);
}

// ============================================================================
// Ordering and purity
// ============================================================================

#[test]
fn test_interleaved_fragments_precede_children() {
    let mut ul = Element::new(Tag::Ul);
    ul.inject_raw("F1");
    ul.append_child(Element::new(Tag::Li).with_text("C1"));
    ul.inject_raw("F2");
    ul.append_child(Element::new(Tag::Li).with_text("C2"));

    assert_eq!(ul.render(), "<ul>F1F2<li>C1</li><li>C2</li></ul>");
}

#[test]
fn test_nested_tree() {
    let table = Element::new(Tag::Table).with_child(
        Element::new(Tag::Tr)
            .with_child(Element::new(Tag::Td).with_text("a"))
            .with_child(Element::new(Tag::Td).with_text("b")),
    );
    let body = Element::new(Tag::Body).with_child(table);

    assert_eq!(
        body.render(),
        "<body><table><tr><td>a</td><td>b</td></tr></table></body>"
    );
}

#[test]
fn test_render_twice_is_identical() {
    let mut div = Element::new(Tag::Div).with_attribute("id", "x");
    div.inject_raw("<hr/>");
    div.append_child(Element::new(Tag::P).with_text("body"));

    let first = div.render();
    let second = div.render();
    assert_eq!(first, second);
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn test_script_text_is_escaped() {
    let mut p = Element::new(Tag::P);
    p.set_text("<script>alert(1)</script>");

    let html = p.render();
    assert!(!html.contains("<script>"));
    assert_eq!(html, "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
}

#[test]
fn test_raw_fragments_are_verbatim() {
    let div = Element::new(Tag::Div).with_raw("<script>ok()</script>");
    assert_eq!(div.render(), "<div><script>ok()</script></div>");
}

// ============================================================================
// Construction errors
// ============================================================================

#[test]
fn test_unknown_tag_fails_at_construction() {
    let err = Element::from_name("marquee").unwrap_err();
    assert!(matches!(err, Error::UnknownTagKind(ref name) if name == "marquee"));
    assert_eq!(err.to_string(), "Unknown tag kind: marquee");
}

// ============================================================================
// Renderable wrappers and threads
// ============================================================================

#[derive(Debug)]
struct Card {
    root: Element,
}

impl Card {
    fn new(title: &str) -> Self {
        let root = Element::new(Tag::Div)
            .with_attribute("class", "card")
            .with_child(Element::new(Tag::H2).with_text(title));
        Self { root }
    }
}

impl Renderable for Card {
    fn top_level_element(&self) -> &Element {
        &self.root
    }
}

#[test]
fn test_custom_renderable_child() {
    let mut main = Element::new(Tag::Main);
    main.append_child(Card::new("One"));
    main.append_child(Card::new("Two"));

    assert_eq!(
        main.render(),
        r#"<main><div class="card" ><h2>One</h2></div><div class="card" ><h2>Two</h2></div></main>"#
    );
}

#[test]
fn test_subtrees_built_on_other_threads() {
    let handles: Vec<_> = (0..3)
        .map(|i| thread::spawn(move || Element::new(Tag::Li).with_text(&format!("item {i}"))))
        .collect();

    let mut ol = Element::new(Tag::Ol);
    for handle in handles {
        ol.append_child(handle.join().unwrap());
    }

    assert_eq!(
        ol.render(),
        "<ol><li>item 0</li><li>item 1</li><li>item 2</li></ol>"
    );
}

// ============================================================================
// Properties
// ============================================================================

fn any_tag() -> impl Strategy<Value = Tag> {
    prop::sample::select(Tag::ALL)
}

proptest! {
    #[test]
    fn prop_text_never_leaks_markup(text in ".*") {
        let p = Element::new(Tag::P).with_text(&text);
        let html = p.render();
        let inner = &html["<p>".len()..html.len() - "</p>".len()];
        prop_assert!(!inner.contains('<'));
        prop_assert!(!inner.contains('>'));
    }

    #[test]
    fn prop_render_is_pure(tag in any_tag(), key in "[a-z]{1,8}", value in ".*", text in ".*") {
        let mut element = Element::new(tag);
        element.set_attribute(key, value);
        element.set_text(&text);
        element.append_child(Element::new(Tag::Span));
        prop_assert_eq!(element.render(), element.render());
    }

    #[test]
    fn prop_void_never_renders_children(tag in any_tag(), text in ".*") {
        let mut element = Element::new(tag);
        element.set_text(&text);
        element.append_child(Element::new(Tag::Em));
        let html = element.render();
        if tag.is_void() {
            prop_assert_eq!(html, format!("<{}/>", tag.name()));
        } else {
            let tail = format!("<em></em></{}>", tag.name());
            prop_assert!(html.ends_with(&tail));
        }
    }
}
