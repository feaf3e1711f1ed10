//! The standard pass table and the renderer that runs it.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use tracing::trace;

use super::pass::{Stage, TransformPass};
use crate::error::{Error, PatternError, Result};

/// Standard passes, in pipeline order.
///
/// Line-based passes run in CRLF-aware multi-line mode, and no payload class
/// ever admits `\r`, so `\r\n` input keeps its line endings intact.
///
/// Hash headings are anchored to a line start and their payload must begin
/// with a non-hash character, so each level only matches its own delimiter
/// run. They still run from six hashes down to one. Underline payloads never
/// start with `<`, which keeps `---` from re-wrapping a line an earlier pass
/// already turned into a heading. Bold runs before italics: `_x_` would
/// otherwise match inside `__x__`. Blockquotes are anchored to a line start,
/// where wrapper tags emitted by earlier passes (which all start with `<`)
/// never match.
const STANDARD_PASSES: &[(&str, Stage, &str, &str)] = &[
    ("setext-h1", Stage::Headers, r"(?mR)^([^<\r\n][^\r\n]*)\r?\n=+[ \t]*$", "h1"),
    ("setext-h2", Stage::Headers, r"(?mR)^([^<\r\n][^\r\n]*)\r?\n-+[ \t]*$", "h2"),
    ("atx-h6", Stage::Headers, r"(?mR)^#{6}[ \t]*([^#\s](?:[^\r\n]*[^#\s])?)[ \t]*#*[ \t]*$", "h6"),
    ("atx-h5", Stage::Headers, r"(?mR)^#{5}[ \t]*([^#\s](?:[^\r\n]*[^#\s])?)[ \t]*#*[ \t]*$", "h5"),
    ("atx-h4", Stage::Headers, r"(?mR)^#{4}[ \t]*([^#\s](?:[^\r\n]*[^#\s])?)[ \t]*#*[ \t]*$", "h4"),
    ("atx-h3", Stage::Headers, r"(?mR)^#{3}[ \t]*([^#\s](?:[^\r\n]*[^#\s])?)[ \t]*#*[ \t]*$", "h3"),
    ("atx-h2", Stage::Headers, r"(?mR)^#{2}[ \t]*([^#\s](?:[^\r\n]*[^#\s])?)[ \t]*#*[ \t]*$", "h2"),
    ("atx-h1", Stage::Headers, r"(?mR)^#[ \t]*([^#\s](?:[^\r\n]*[^#\s])?)[ \t]*#*[ \t]*$", "h1"),
    ("bold-underscore", Stage::Bold, r"__([^_\r\n]+)__", "strong"),
    ("bold-asterisk", Stage::Bold, r"\*\*([^*\r\n]+)\*\*", "strong"),
    ("italic-underscore", Stage::Italics, r"_([^_\r\n]+)_", "em"),
    ("italic-asterisk", Stage::Italics, r"\*([^*\r\n]+)\*", "em"),
    ("blockquote", Stage::BlockQuotes, r"(?mR)^>[ \t]?([^\r\n]*)$", "blockquote"),
];

static STANDARD: Lazy<std::result::Result<MarkdownRenderer, PatternError>> =
    Lazy::new(MarkdownRenderer::standard);

/// Render dialect text with the standard pipeline.
///
/// The result is a markup fragment meant for [`Element::inject_raw`]. The
/// input is not HTML-escaped. Running the output through `transform` again is
/// not a no-op: every call runs each pass exactly once over its own input.
///
/// [`Element::inject_raw`]: crate::Element::inject_raw
///
/// # Examples
///
/// ```
/// use trellis::markdown::transform;
///
/// assert_eq!(transform("# Title").unwrap(), "<h1>Title</h1>");
/// assert_eq!(
///     transform("__bold__ and _italic_").unwrap(),
///     "<strong>bold</strong> and <em>italic</em>"
/// );
/// ```
pub fn transform(text: &str) -> Result<String> {
    Ok(standard_renderer()?.render(text))
}

/// The shared standard renderer, compiled on first use.
pub fn standard_renderer() -> Result<&'static MarkdownRenderer> {
    STANDARD.as_ref().map_err(|e| Error::from(e.clone()))
}

/// Replace every match of `pattern` in `text` with `start + $1 + end`.
///
/// Compiles the pattern on each call; prefer a [`TransformPass`] when the same
/// pattern is reused.
pub fn replace_matches(pattern: &str, text: &str, start: &str, end: &str) -> Result<String> {
    // Stage only filters passes inside a renderer; a lone pass ignores it.
    let pass = TransformPass::new("replace-matches", Stage::Headers, pattern, start, end)?;
    Ok(pass.apply(text).into_owned())
}

/// An ordered pipeline of [`TransformPass`]es.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    passes: Vec<TransformPass>,
}

impl MarkdownRenderer {
    /// Compile the standard pipeline.
    pub fn new() -> Result<Self> {
        Ok(Self::standard()?)
    }

    /// Build a pipeline from caller-ordered passes, run exactly as given.
    pub fn with_passes(passes: Vec<TransformPass>) -> Self {
        Self { passes }
    }

    fn standard() -> std::result::Result<Self, PatternError> {
        let passes = STANDARD_PASSES
            .iter()
            .map(|&(name, stage, pattern, tag)| TransformPass::wrapping(name, stage, pattern, tag))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { passes })
    }

    pub fn passes(&self) -> &[TransformPass] {
        &self.passes
    }

    /// Run every pass once, in order, each over the previous pass's output.
    pub fn render(&self, text: &str) -> String {
        self.run(text, |_| true)
    }

    /// Run only the passes of one stage.
    pub fn render_stage(&self, stage: Stage, text: &str) -> String {
        self.run(text, |pass| pass.stage() == stage)
    }

    pub fn render_headers(&self, text: &str) -> String {
        self.render_stage(Stage::Headers, text)
    }

    pub fn render_bold(&self, text: &str) -> String {
        self.render_stage(Stage::Bold, text)
    }

    pub fn render_italics(&self, text: &str) -> String {
        self.render_stage(Stage::Italics, text)
    }

    pub fn render_block_quotes(&self, text: &str) -> String {
        self.render_stage(Stage::BlockQuotes, text)
    }

    fn run(&self, text: &str, include: impl Fn(&TransformPass) -> bool) -> String {
        let mut output = text.to_string();
        for pass in self.passes.iter().filter(|p| include(p)) {
            if let Cow::Owned(next) = pass.apply(&output) {
                trace!(pass = pass.name(), len = next.len(), "transform pass matched");
                output = next;
            }
        }
        output
    }
}
