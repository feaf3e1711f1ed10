//! Ready-made widgets built from [`Element`](crate::Element)s.
//!
//! Every widget owns one root element and exposes it through
//! [`Renderable`](crate::Renderable), so widgets can be appended as children
//! anywhere in a tree:
//!
//! ```
//! use trellis::{Element, Tag};
//! use trellis::widgets::{Anchor, Paragraph};
//!
//! let mut div = Element::new(Tag::Div);
//! div.append_child(Paragraph::new("Read the docs"));
//! div.append_child(Anchor::new("docs", "/docs"));
//! assert_eq!(
//!     div.render(),
//!     r#"<div><p>Read the docs</p><a href="/docs" >docs</a></div>"#
//! );
//! ```

mod anchor;
mod form;
mod link;
mod list;
mod navigation;
mod paragraph;
mod table;

pub use anchor::Anchor;
pub use form::{Form, FormField, LoginField};
pub use link::StylesheetLink;
pub use list::{List, ListItem};
pub use navigation::Navigation;
pub use paragraph::Paragraph;
pub use table::Table;
