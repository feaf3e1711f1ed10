//! The element tree model.
//!
//! - [`tag`]: the closed catalog of element names and their void/container kind
//! - [`node`]: [`Element`], the [`Renderable`] trait, and serialization
//! - [`escape`]: text and attribute escaping
//!
//! ## Serialization contract
//!
//! An element renders as its opening tag, its text, every raw fragment in
//! insertion order, every child in insertion order, and its closing tag.
//! Fragments always come before children no matter how the two kinds of
//! append calls were interleaved. Void elements render as the opening tag
//! only, closed with `/>`:
//!
//! ```
//! use trellis::{Element, Tag};
//!
//! let mut div = Element::new(Tag::Div);
//! div.set_attribute("style", "color:orange;");
//! div.append_child(Element::new(Tag::P));
//! assert_eq!(div.render(), r#"<div style="color:orange;" ><p></p></div>"#);
//!
//! let img = Element::new(Tag::Img).with_attribute("src", "x.png");
//! assert_eq!(img.render(), r#"<img src="x.png" />"#);
//! ```

mod escape;
mod node;
mod tag;

pub use escape::{escape_attribute, escape_html, percent_encode_text};
pub use node::{Element, Renderable};
pub use tag::{Tag, TagKind};
