use super::attributes::Attributes;

/// A node in the output tree. Built bottom-up and never mutated after
/// construction; a parent exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text with an optional wrapping tag. Without a tag the value is emitted verbatim.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },
    /// An element whose content is the concatenation of its children.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

/// Contract violations on the generic construction path.
///
/// These indicate a logic error in the caller rather than bad Markdown input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("parent node has no tag")]
    MissingTag,
    #[error("parent node has no children")]
    MissingChildren,
    #[error("leaf node has no value")]
    MissingValue,
}

/// Loosely-typed node description, validated by `HtmlNode::try_from`.
///
/// `children` takes precedence: parts carrying both children and a value
/// build a parent, and the value is discarded.
#[derive(Debug, Clone, Default)]
pub struct NodeParts {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<HtmlNode>>,
    pub attrs: Attributes,
}

impl HtmlNode {
    /// A leaf wrapped in `tag`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    /// An untagged leaf: raw text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Attaches an attribute, consuming and returning the node.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.insert(name, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                open_tag(out, tag, attrs);
                out.push_str(value);
                close_tag(out, tag);
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                open_tag(out, tag, attrs);
                for child in children {
                    child.render_into(out);
                }
                close_tag(out, tag);
            }
        }
    }
}

fn open_tag(out: &mut String, tag: &str, attrs: &Attributes) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attrs.to_html());
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

impl TryFrom<NodeParts> for HtmlNode {
    type Error = NodeError;

    fn try_from(parts: NodeParts) -> Result<Self, Self::Error> {
        let NodeParts {
            tag,
            value,
            children,
            attrs,
        } = parts;

        match (children, value) {
            (Some(children), _) => {
                let tag = tag.ok_or(NodeError::MissingTag)?;
                Ok(HtmlNode::Parent {
                    tag,
                    children,
                    attrs,
                })
            }
            (None, Some(value)) => Ok(HtmlNode::Leaf { tag, value, attrs }),
            (None, None) if tag.is_some() => Err(NodeError::MissingChildren),
            (None, None) => Err(NodeError::MissingValue),
        }
    }
}
