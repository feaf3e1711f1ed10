//! Markdown-style text to HTML fragments.
//!
//! A small ordered pipeline of regex substitutions, not a Markdown parser:
//!
//! - `pass`: a single [`TransformPass`] (pattern, opening wrapper, closing wrapper)
//! - `render`: the standard pass table and [`MarkdownRenderer`]
//!
//! ## Pipeline
//!
//! | Stage        | Syntax                              | Output          |
//! |--------------|-------------------------------------|-----------------|
//! | Headers      | `Title\n===`, `Title\n---`, `#`..`######` | `<h1>`..`<h6>` |
//! | Bold         | `__x__`, `**x**`                    | `<strong>`      |
//! | Italics      | `_x_`, `*x*`                        | `<em>`          |
//! | Block quotes | `> x` at a line start               | `<blockquote>`  |
//!
//! Each pass sees the output of the one before it and runs exactly once per
//! call. Hash headings and block quotes only match at a line start, and
//! emphasis never spans a line break. `\n` and `\r\n` line endings both work.

mod pass;
mod render;

pub use pass::{Stage, TransformPass};
pub use render::{MarkdownRenderer, replace_matches, standard_renderer, transform};
