//! Front-end libraries a page can pull in.

use crate::element::{Element, Tag};

/// Where a dependency tag goes in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Stylesheet links, injected into `<head>`.
    Markup,
    /// Script tags, appended after the footer inside `<body>`.
    Script,
}

/// A dependency loaded by a [`Page`](super::Page).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Dependency {
    #[cfg_attr(feature = "cli", serde(rename = "jquery"))]
    JQuery,
    Bootstrap,
    /// The UIkit front-end framework.
    #[cfg_attr(feature = "cli", serde(rename = "uikit"))]
    UiKit,
    Normalize,
    /// A stylesheet at the given href.
    CustomCss(String),
    /// A script at the given src.
    #[cfg_attr(feature = "cli", serde(rename = "custom_javascript"))]
    CustomJavaScript(String),
}

const BOOTSTRAP_CSS: &str = "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap.min.css";
const BOOTSTRAP_CSS_SRI: &str =
    "sha384-BVYiiSIFeK1dGmJRAkycuHAHRg32OmUcww7on3RYdg4Va+PmSTsz/K68vbdEjh4u";
const BOOTSTRAP_THEME: &str =
    "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/css/bootstrap-theme.min.css";
const BOOTSTRAP_THEME_SRI: &str =
    "sha384-rHyoN1iRsVXV4nD0JutlnGaslCJuC7uwjduW9SVrLvRYooPp2bWYgmgJQIXwl/Sp";
const BOOTSTRAP_JS: &str = "https://maxcdn.bootstrapcdn.com/bootstrap/3.3.7/js/bootstrap.min.js";
const BOOTSTRAP_JS_SRI: &str =
    "sha384-Tc5IQib027qvyjSMfHjOMaLkfuWVxZxUPnCJA7l2mCWNIpG9mGCD8wGNIcPD7Txa";
const JQUERY_JS: &str = "https://code.jquery.com/jquery-3.1.1.min.js";
const JQUERY_JS_SRI: &str = "sha256-hVVnYaiADRTO2PzUGmuLJr8BLUSjGIZsDYGmIJLv2b8=";
const UIKIT_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/uikit/3.0.0-beta.12/css/uikit.min.css";
const UIKIT_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/uikit/3.0.0-beta.12/js/uikit.min.js";
const NORMALIZE_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/normalize/6.0.0/normalize.min.css";

impl Dependency {
    /// The tags for this dependency, in load order.
    pub fn html_tags(&self) -> Vec<(DependencyKind, String)> {
        match self {
            Dependency::Bootstrap => vec![
                (DependencyKind::Markup, stylesheet(BOOTSTRAP_CSS, Some(BOOTSTRAP_CSS_SRI))),
                (DependencyKind::Markup, stylesheet(BOOTSTRAP_THEME, Some(BOOTSTRAP_THEME_SRI))),
                (DependencyKind::Script, script(BOOTSTRAP_JS, Some(BOOTSTRAP_JS_SRI))),
            ],
            Dependency::JQuery => {
                vec![(DependencyKind::Script, script(JQUERY_JS, Some(JQUERY_JS_SRI)))]
            }
            Dependency::UiKit => vec![
                (DependencyKind::Markup, stylesheet(UIKIT_CSS, None)),
                (DependencyKind::Script, script(UIKIT_JS, None)),
            ],
            Dependency::Normalize => vec![(DependencyKind::Markup, stylesheet(NORMALIZE_CSS, None))],
            Dependency::CustomCss(href) => vec![(DependencyKind::Markup, stylesheet(href, None))],
            Dependency::CustomJavaScript(src) => vec![(DependencyKind::Script, script(src, None))],
        }
    }

    /// Only the tags of one kind.
    pub fn tags_of(&self, kind: DependencyKind) -> impl Iterator<Item = String> {
        self.html_tags()
            .into_iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, tag)| tag)
    }
}

fn stylesheet(href: &str, integrity: Option<&str>) -> String {
    let mut link = Element::new(Tag::Link)
        .with_attribute("rel", "stylesheet")
        .with_attribute("href", href);
    if let Some(sri) = integrity {
        link.set_attribute("integrity", sri);
        link.set_attribute("crossorigin", "anonymous");
    }
    link.render()
}

fn script(src: &str, integrity: Option<&str>) -> String {
    let mut script = Element::new(Tag::Script).with_attribute("src", src);
    if let Some(sri) = integrity {
        script.set_attribute("integrity", sri);
        script.set_attribute("crossorigin", "anonymous");
    }
    script.render()
}
