//! Element selectors
//!
//! A compound simple selector: tag, id, classes, negated classes, and an
//! attribute-prefix test, matched against [`PageNode`](crate::node::PageNode)
//! descriptions. The text format is the CSS subset blog themes actually use
//! for these hooks:
//!
//! - `.card-widget` (class)
//! - `#page-header` (id)
//! - `a[href^="#"]` (tag with attribute-prefix test)
//! - `.post-item:not(.pinned)` (class with negation)
//!
//! `Display` renders a selector back to that format, so DOM-backed hosts can
//! hand it to a native query API verbatim.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::char,
    sequence::terminated,
    IResult,
};
use smallvec::SmallVec;
use thiserror::Error;

use crate::node::PageNode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorParseError {
    #[error("empty selector")]
    Empty,
    #[error("unexpected `{0}` in selector")]
    UnexpectedChar(char),
    #[error("expected an identifier after `{0}`")]
    ExpectedIdentifier(char),
    #[error("unsupported pseudo-class `:{0}` (only `:not(.class)` is supported)")]
    UnsupportedPseudo(String),
    #[error("attribute test must use the prefix operator `^=\"...\"`")]
    BadAttributeTest,
    #[error("unterminated `{0}`")]
    Unterminated(&'static str),
}

/// A compound simple selector
///
/// All parts are conjunctive: an element matches when it satisfies every
/// part that is set. An empty selector matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    /// Required tag name (lowercase)
    pub tag: Option<String>,
    /// Required id
    pub id: Option<String>,
    /// Classes the element must carry
    pub classes: SmallVec<[String; 2]>,
    /// Classes the element must NOT carry (`:not(.x)`)
    pub not_classes: SmallVec<[String; 1]>,
    /// Attribute whose value must start with a prefix (`[attr^="v"]`)
    pub attr_prefix: Option<(String, String)>,
}

impl Selector {
    /// Selector matching a tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into().to_ascii_lowercase()),
            ..Self::default()
        }
    }

    /// Selector matching an element id
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Selector matching a single class
    pub fn class(class: impl Into<String>) -> Self {
        let mut classes = SmallVec::new();
        classes.push(class.into());
        Self {
            classes,
            ..Self::default()
        }
    }

    /// Require an id as well
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Require an additional class
    pub fn and_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Exclude elements carrying a class
    pub fn without_class(mut self, class: impl Into<String>) -> Self {
        self.not_classes.push(class.into());
        self
    }

    /// Require an attribute value to start with a prefix
    pub fn with_attr_prefix(mut self, attr: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.attr_prefix = Some((attr.into(), prefix.into()));
        self
    }

    /// Whether any part is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Test a node description against this selector
    pub fn matches(&self, node: &PageNode) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| node.has_class(c)) {
            return false;
        }
        if self.not_classes.iter().any(|c| node.has_class(c)) {
            return false;
        }
        if let Some((attr, prefix)) = &self.attr_prefix {
            match node.attr_value(attr) {
                Some(value) if value.starts_with(prefix.as_str()) => {}
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        if let Some((attr, prefix)) = &self.attr_prefix {
            write!(f, "[{attr}^=\"{prefix}\"]")?;
        }
        for class in &self.not_classes {
            write!(f, ":not(.{class})")?;
        }
        Ok(())
    }
}

/// One CSS identifier: letters, digits, `-`, `_`
fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(input)
}

/// The value half of an attribute test: everything up to the closing quote
fn quoted_prefix(input: &str) -> IResult<&str, &str> {
    terminated(take_until("\""), char('"'))(input)
}

impl FromStr for Selector {
    type Err = SelectorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut remaining = s.trim();
        if remaining.is_empty() {
            return Err(SelectorParseError::Empty);
        }

        let mut selector = Selector::default();

        // Optional leading tag
        if let Ok((rest, tag)) = identifier(remaining) {
            selector.tag = Some(tag.to_ascii_lowercase());
            remaining = rest;
        }

        while !remaining.is_empty() {
            if let Some(rest) = remaining.strip_prefix('#') {
                let (rest, id) =
                    identifier(rest).map_err(|_| SelectorParseError::ExpectedIdentifier('#'))?;
                selector.id = Some(id.to_string());
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix('.') {
                let (rest, class) =
                    identifier(rest).map_err(|_| SelectorParseError::ExpectedIdentifier('.'))?;
                selector.classes.push(class.to_string());
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix('[') {
                let (rest, attr) =
                    identifier(rest).map_err(|_| SelectorParseError::ExpectedIdentifier('['))?;
                let rest = rest
                    .strip_prefix("^=\"")
                    .ok_or(SelectorParseError::BadAttributeTest)?;
                let (rest, prefix) = quoted_prefix(rest)
                    .map_err(|_| SelectorParseError::Unterminated("[attr^=\""))?;
                let rest = rest
                    .strip_prefix(']')
                    .ok_or(SelectorParseError::Unterminated("["))?;
                selector.attr_prefix = Some((attr.to_string(), prefix.to_string()));
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix(':') {
                let (rest, pseudo) =
                    identifier(rest).map_err(|_| SelectorParseError::ExpectedIdentifier(':'))?;
                if pseudo != "not" {
                    return Err(SelectorParseError::UnsupportedPseudo(pseudo.to_string()));
                }
                let rest = rest
                    .strip_prefix("(.")
                    .ok_or_else(|| SelectorParseError::UnsupportedPseudo("not".to_string()))?;
                let (rest, class) =
                    identifier(rest).map_err(|_| SelectorParseError::ExpectedIdentifier('.'))?;
                let rest = rest
                    .strip_prefix(')')
                    .ok_or(SelectorParseError::Unterminated(":not("))?;
                selector.not_classes.push(class.to_string());
                remaining = rest;
            } else {
                let found = remaining.chars().next().unwrap_or(' ');
                return Err(SelectorParseError::UnexpectedChar(found));
            }
        }

        Ok(selector)
    }
}

// Serde goes through the text form so selectors stay readable in config files
#[cfg(feature = "serde")]
impl serde::Serialize for Selector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Selector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_class() {
        let sel: Selector = ".card-widget".parse().unwrap();
        assert_eq!(sel, Selector::class("card-widget"));
    }

    #[test]
    fn test_parse_compound() {
        let sel: Selector = "a.external[href^=\"#\"]:not(.plain)".parse().unwrap();
        assert_eq!(sel.tag.as_deref(), Some("a"));
        assert_eq!(sel.classes.as_slice(), ["external".to_string()]);
        assert_eq!(sel.not_classes.as_slice(), ["plain".to_string()]);
        assert_eq!(
            sel.attr_prefix,
            Some(("href".to_string(), "#".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for text in [
            ".card-widget",
            "#page-header",
            "a[href^=\"#\"]",
            ".post-item:not(.pinned)",
            "div#subtitle.typed",
        ] {
            let sel: Selector = text.parse().unwrap();
            assert_eq!(sel.to_string(), text);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Selector>(), Err(SelectorParseError::Empty));
        assert_eq!(
            ".".parse::<Selector>(),
            Err(SelectorParseError::ExpectedIdentifier('.'))
        );
        assert!(matches!(
            "a:hover".parse::<Selector>(),
            Err(SelectorParseError::UnsupportedPseudo(_))
        ));
        assert_eq!(
            "a[href=\"#\"]".parse::<Selector>(),
            Err(SelectorParseError::BadAttributeTest)
        );
    }

    #[test]
    fn test_matches_classes_and_negation() {
        let node = PageNode::new("div").class("post-item").class("pinned");
        assert!(Selector::class("post-item").matches(&node));
        assert!(!Selector::class("post-item")
            .without_class("pinned")
            .matches(&node));
        assert!(!Selector::class("missing").matches(&node));
    }

    #[test]
    fn test_matches_attr_prefix() {
        let anchor = PageNode::new("a").attr("href", "#section-2");
        let external = PageNode::new("a").attr("href", "https://example.com");
        let sel = Selector::tag("a").with_attr_prefix("href", "#");
        assert!(sel.matches(&anchor));
        assert!(!sel.matches(&external));
    }

    #[test]
    fn test_matches_tag_case_insensitive() {
        let node = PageNode::new("DIV").with_id("page-header");
        assert!(Selector::tag("div").matches(&node));
        assert!(Selector::id("page-header").matches(&node));
    }

    #[test]
    fn test_empty_selector_matches_nothing() {
        assert!(!Selector::default().matches(&PageNode::new("div")));
    }
}
