//! The closed catalog of element names.
//!
//! Every tag carries its [`TagKind`] in the catalog table below. Whether an
//! element is void is decided here once and never per instance.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Structural kind of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// No closing tag; text, raw fragments and children are dropped.
    Void,
    /// Matching open/close pair that may hold content.
    Container,
}

macro_rules! tag_catalog {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, $kind:ident; )*) => {
        /// All the HTML elements that can be created.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Tag {
            $( $(#[$doc])* $variant, )*
        }

        impl Tag {
            /// Every tag in the catalog, in alphabetical order.
            pub const ALL: &'static [Tag] = &[ $( Tag::$variant, )* ];

            /// The element name as written in markup.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Tag::$variant => $name, )*
                }
            }

            /// Structural kind from the catalog table.
            pub const fn kind(self) -> TagKind {
                match self {
                    $( Tag::$variant => TagKind::$kind, )*
                }
            }

            fn lookup(name: &str) -> Option<Tag> {
                match name {
                    $( $name => Some(Tag::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

tag_catalog! {
    /// Anchor, used for links.
    A => "a", Container;
    Abbr => "abbr", Container;
    Address => "address", Container;
    /// Image map area.
    Area => "area", Void;
    Article => "article", Container;
    Aside => "aside", Container;
    Audio => "audio", Container;
    B => "b", Container;
    Base => "base", Void;
    Bdi => "bdi", Container;
    Bdo => "bdo", Container;
    Blockquote => "blockquote", Container;
    Body => "body", Container;
    /// Line break.
    Br => "br", Void;
    Button => "button", Container;
    Canvas => "canvas", Container;
    Caption => "caption", Container;
    Cite => "cite", Container;
    Code => "code", Container;
    Col => "col", Void;
    /// Table column group. Holds `col` children, so it is a container.
    Colgroup => "colgroup", Container;
    Data => "data", Container;
    Datalist => "datalist", Container;
    Dd => "dd", Container;
    Del => "del", Container;
    Details => "details", Container;
    Dfn => "dfn", Container;
    Dialog => "dialog", Container;
    Div => "div", Container;
    Dl => "dl", Container;
    Dt => "dt", Container;
    Em => "em", Container;
    Embed => "embed", Void;
    Fieldset => "fieldset", Container;
    Figcaption => "figcaption", Container;
    Figure => "figure", Container;
    Footer => "footer", Container;
    Form => "form", Container;
    H1 => "h1", Container;
    H2 => "h2", Container;
    H3 => "h3", Container;
    H4 => "h4", Container;
    H5 => "h5", Container;
    H6 => "h6", Container;
    Head => "head", Container;
    Header => "header", Container;
    /// Thematic break.
    Hr => "hr", Void;
    Html => "html", Container;
    I => "i", Container;
    Iframe => "iframe", Container;
    Img => "img", Void;
    Input => "input", Void;
    Ins => "ins", Container;
    Kbd => "kbd", Container;
    Label => "label", Container;
    Legend => "legend", Container;
    Li => "li", Container;
    /// External resource link, usually a stylesheet.
    Link => "link", Void;
    Main => "main", Container;
    Map => "map", Container;
    Mark => "mark", Container;
    Menu => "menu", Container;
    Menuitem => "menuitem", Container;
    Meta => "meta", Void;
    Meter => "meter", Container;
    Nav => "nav", Container;
    Noscript => "noscript", Container;
    Object => "object", Container;
    Ol => "ol", Container;
    Optgroup => "optgroup", Container;
    Option => "option", Container;
    Output => "output", Container;
    P => "p", Container;
    Param => "param", Void;
    Picture => "picture", Container;
    Pre => "pre", Container;
    Progress => "progress", Container;
    Q => "q", Container;
    Rp => "rp", Container;
    Rt => "rt", Container;
    Rtc => "rtc", Container;
    Ruby => "ruby", Container;
    S => "s", Container;
    Samp => "samp", Container;
    Script => "script", Container;
    Section => "section", Container;
    Select => "select", Container;
    Small => "small", Container;
    Source => "source", Void;
    Span => "span", Container;
    Strong => "strong", Container;
    Style => "style", Container;
    Sub => "sub", Container;
    Summary => "summary", Container;
    Sup => "sup", Container;
    Table => "table", Container;
    Tbody => "tbody", Container;
    Td => "td", Container;
    Template => "template", Container;
    Textarea => "textarea", Container;
    Tfoot => "tfoot", Container;
    Th => "th", Container;
    Thead => "thead", Container;
    Time => "time", Container;
    Title => "title", Container;
    Tr => "tr", Container;
    Track => "track", Void;
    U => "u", Container;
    Ul => "ul", Container;
    Var => "var", Container;
    Video => "video", Container;
    /// Word break opportunity.
    Wbr => "wbr", Void;
}

impl Tag {
    /// Whether this element kind is void (self-closed, content dropped).
    pub const fn is_void(self) -> bool {
        matches!(self.kind(), TagKind::Void)
    }

    /// Heading tag for a level in `1..=6`.
    pub fn heading(level: u8) -> Option<Tag> {
        match level {
            1 => Some(Tag::H1),
            2 => Some(Tag::H2),
            3 => Some(Tag::H3),
            4 => Some(Tag::H4),
            5 => Some(Tag::H5),
            6 => Some(Tag::H6),
            _ => None,
        }
    }
}

impl FromStr for Tag {
    type Err = Error;

    /// Parse an element name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::lookup(&s.to_ascii_lowercase()).ok_or_else(|| Error::UnknownTagKind(s.to_string()))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_table() {
        let void: Vec<&str> = Tag::ALL
            .iter()
            .filter(|t| t.is_void())
            .map(|t| t.name())
            .collect();
        assert_eq!(
            void,
            [
                "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
                "param", "source", "track", "wbr"
            ]
        );
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("div".parse::<Tag>().unwrap(), Tag::Div);
        assert_eq!("IMG".parse::<Tag>().unwrap(), Tag::Img);
        assert_eq!("h6".parse::<Tag>().unwrap(), Tag::H6);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "blink".parse::<Tag>().unwrap_err();
        assert!(matches!(err, Error::UnknownTagKind(ref name) if name == "blink"));
    }

    #[test]
    fn test_every_name_round_trips() {
        for tag in Tag::ALL {
            assert_eq!(tag.name().parse::<Tag>().unwrap(), *tag);
            assert_eq!(tag.to_string(), tag.name());
        }
    }

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let names: Vec<&str> = Tag::ALL.iter().map(|t| t.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(Tag::heading(1), Some(Tag::H1));
        assert_eq!(Tag::heading(6), Some(Tag::H6));
        assert_eq!(Tag::heading(0), None);
        assert_eq!(Tag::heading(7), None);
    }
}
