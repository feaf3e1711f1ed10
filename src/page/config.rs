//! JSON page descriptions.

use serde::{Deserialize, Serialize};

use super::{Dependency, Page};
use crate::error::Result;
use crate::markdown;

/// A page described as data.
///
/// Region texts are markdown-style dialect text; each is run through
/// [`markdown::transform`] and injected raw into its region.
///
/// ```json
/// {
///   "title": "Home",
///   "section": "# Welcome\n\nSome **bold** text",
///   "dependencies": ["normalize", {"custom_css": "/site.css"}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub header: Option<String>,
    pub section: Option<String>,
    pub footer: Option<String>,
    pub dependencies: Vec<Dependency>,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the page this config describes.
    pub fn build(&self) -> Result<Page> {
        let mut page = Page::new(&self.title);
        if let Some(text) = &self.header {
            page.header.inject_raw(markdown::transform(text)?);
        }
        if let Some(text) = &self.section {
            page.section.inject_raw(markdown::transform(text)?);
        }
        if let Some(text) = &self.footer {
            page.footer.inject_raw(markdown::transform(text)?);
        }
        for dependency in &self.dependencies {
            page.import(dependency.clone());
        }
        Ok(page)
    }
}
