//! End-to-end tests for the text transform pipeline.

use trellis::markdown::{self, MarkdownRenderer, Stage, TransformPass, transform};
use trellis::{Element, Tag};

#[test]
fn test_plain_text_passes_through() {
    let text = "nothing to see here\nat all";
    assert_eq!(transform(text).unwrap(), text);
}

#[test]
fn test_empty_input() {
    assert_eq!(transform("").unwrap(), "");
}

#[test]
fn test_closing_hashes_are_dropped() {
    assert_eq!(transform("## Section ##").unwrap(), "<h2>Section</h2>");
}

#[test]
fn test_mixed_document() {
    let text = "# Notes\n__Remember__ the *milk*\n> be quick";
    assert_eq!(
        transform(text).unwrap(),
        "<h1>Notes</h1>\n<strong>Remember</strong> the <em>milk</em>\n<blockquote>be quick</blockquote>"
    );
}

#[test]
fn test_emphasis_inside_heading() {
    assert_eq!(
        transform("# A **big** deal").unwrap(),
        "<h1>A <strong>big</strong> deal</h1>"
    );
}

#[test]
fn test_emphasis_does_not_cross_lines() {
    let text = "*start\nend*";
    assert_eq!(transform(text).unwrap(), text);
}

#[test]
fn test_input_is_not_escaped() {
    assert_eq!(
        transform("**<i>x</i>**").unwrap(),
        "<strong><i>x</i></strong>"
    );
}

#[test]
fn test_stage_renderers_match_full_pipeline_order() {
    let renderer = markdown::standard_renderer().unwrap();
    let text = "### **x** _y_\n> z";

    let staged = renderer.render_block_quotes(&renderer.render_italics(
        &renderer.render_bold(&renderer.render_headers(text)),
    ));
    assert_eq!(staged, renderer.render(text));
}

#[test]
fn test_custom_pipeline() {
    let strike = TransformPass::new("strike", Stage::Italics, r"~~([^~]+)~~", "<del>", "</del>").unwrap();
    let renderer = MarkdownRenderer::with_passes(vec![strike]);

    assert_eq!(renderer.render("~~gone~~ **kept**"), "<del>gone</del> **kept**");
}

#[test]
fn test_fragment_injected_into_element() {
    let mut section = Element::new(Tag::Section);
    section.inject_raw(transform("# Hello").unwrap());
    section.append_child(Element::new(Tag::P).with_text("after"));

    assert_eq!(
        section.render(),
        "<section><h1>Hello</h1><p>after</p></section>"
    );
}
