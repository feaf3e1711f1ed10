//! # trellis
//!
//! Build HTML documents from a typed element tree.
//!
//! ## Features
//!
//! - A closed [`Tag`] catalog where void elements are known up front
//! - [`Element`] nodes with attributes, escaped text, raw fragments and children
//! - A [`Renderable`] trait so widgets can sit anywhere in a tree
//! - A small markdown-style [`markdown::transform`] for headings, emphasis and quotes
//! - [`Page`] assembly with CDN [`Dependency`] injection
//!
//! ## Quick Start
//!
//! ```
//! use trellis::{Element, Tag, markdown};
//!
//! let mut article = Element::new(Tag::Article);
//! article.set_attribute("class", "post");
//! article.inject_raw(markdown::transform("**Welcome** back, _friend_").unwrap());
//! article.append_child(Element::new(Tag::P).with_text("1 < 2"));
//!
//! assert_eq!(
//!     article.render(),
//!     r#"<article class="post" ><strong>Welcome</strong> back, <em>friend</em><p>1 &lt; 2</p></article>"#
//! );
//! ```
//!
//! ## Building Pages
//!
//! ```
//! use trellis::{Dependency, Page};
//! use trellis::widgets::Navigation;
//!
//! let mut page = Page::new("Home");
//! page.import(Dependency::Normalize);
//! page.header.append_child(Navigation::new([("Home", "/"), ("Blog", "/blog")]));
//!
//! let html = page.render();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod element;
pub mod error;
pub mod export;
pub mod markdown;
pub mod page;
pub mod sml;
pub mod widgets;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use element::{Element, Renderable, Tag, TagKind};
pub use error::{Error, PatternError, Result};
pub use page::{Dependency, DependencyKind, Page};
