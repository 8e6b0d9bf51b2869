/// Ordered attribute list. Serialization follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Renders as ` name="value"` per attribute, or an empty string.
    pub fn to_html(&self) -> String {
        self.iter()
            .map(|(name, value)| format!(" {name}=\"{value}\""))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid HTML: leaf node has no value")]
    LeafMissingValue,
    #[error("Invalid HTML: parent node has no tag")]
    ParentMissingTag,
    #[error("Invalid HTML: parent node has no children")]
    ParentMissingChildren,
}

/// A childless node. Without a tag the value is emitted as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// A tag-less leaf that serializes to `value` verbatim.
    pub fn raw(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(name, value);
        self
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let value = self.value.as_deref().ok_or(RenderError::LeafMissingValue)?;
        Ok(match &self.tag {
            None => value.to_string(),
            Some(tag) => format!("<{tag}{}>{value}</{tag}>", self.attributes.to_html()),
        })
    }
}

/// A tagged node owning an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(name, value);
        self
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let tag = self.tag.as_deref().ok_or(RenderError::ParentMissingTag)?;
        let children = self
            .children
            .as_ref()
            .ok_or(RenderError::ParentMissingChildren)?;

        let mut out = format!("<{tag}{}>", self.attributes.to_html());
        for child in children {
            out.push_str(&child.to_html()?);
        }
        out.push_str(&format!("</{tag}>"));
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    /// Serializes this node and, for parents, all descendants.
    pub fn to_html(&self) -> Result<String, RenderError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}
