//! Page node descriptions
//!
//! A `PageNode` is the enhancer-visible shape of a page element: tag, id,
//! classes, and attributes. Hosts translate their native elements into
//! nodes; the headless surface stores nodes directly.

use smallvec::SmallVec;

/// Description of a single page element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageNode {
    /// Tag name as the host reported it
    pub tag: String,
    pub id: Option<String>,
    pub classes: SmallVec<[String; 4]>,
    /// Attribute name/value pairs (href, data-*, ...)
    pub attrs: SmallVec<[(String, String); 2]>,
}

impl PageNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute value by name
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
