//! Single pattern-substitution passes.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::PatternError;

/// The pipeline stage a pass belongs to.
///
/// Stages run in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Headers,
    Bold,
    Italics,
    BlockQuotes,
}

/// One substitution step: every match of `pattern` is replaced by
/// `start + $1 + end`.
#[derive(Debug, Clone)]
pub struct TransformPass {
    name: &'static str,
    stage: Stage,
    pattern: Regex,
    start: String,
    end: String,
}

impl TransformPass {
    /// Compile a pass. The pattern must have at least one capture group; the
    /// first group is the payload.
    pub fn new(
        name: &'static str,
        stage: Stage,
        pattern: &str,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let regex = Regex::new(pattern).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            name,
            stage,
            pattern: regex,
            start: start.into(),
            end: end.into(),
        })
    }

    /// Pass wrapping its payload in `<tag>` ... `</tag>`.
    pub(crate) fn wrapping(
        name: &'static str,
        stage: Stage,
        pattern: &str,
        tag: &str,
    ) -> Result<Self, PatternError> {
        Self::new(name, stage, pattern, format!("<{tag}>"), format!("</{tag}>"))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply the pass once over the whole input.
    ///
    /// Matches are non-overlapping and found left to right; the replacement is
    /// literal, so `$` in the wrappers is never expanded. Borrows the input
    /// when nothing matched.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(input, |caps: &Captures<'_>| {
            let payload = caps.get(1).map_or("", |m| m.as_str());
            let mut out = String::with_capacity(self.start.len() + payload.len() + self.end.len());
            out.push_str(&self.start);
            out.push_str(payload);
            out.push_str(&self.end);
            out
        })
    }
}
