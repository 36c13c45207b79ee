use crate::{
    foundation::error::{OgError, OgResult},
    layout::style::{AttrScope, Style},
};

/// One node of the declarative layout tree.
///
/// Built only through [`LayoutNode::boxed`] and [`LayoutNode::text`], which reject styles outside
/// what the node kind supports. Trees are never patched after construction.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutNode {
    /// Flex container; children render in order.
    Box {
        /// Container style.
        style: Style,
        /// Ordered children.
        children: Vec<LayoutNode>,
    },
    /// Text leaf.
    Text {
        /// Text style.
        style: Style,
        /// Rendered string.
        content: String,
    },
}

impl LayoutNode {
    /// Validated flex container.
    pub fn boxed(style: Style, children: Vec<LayoutNode>) -> OgResult<Self> {
        check_scope(&style, AttrScope::Box, "box")?;
        if style.display.is_none() {
            return Err(OgError::configuration("box nodes must declare display: flex"));
        }
        Ok(Self::Box { style, children })
    }

    /// Validated text leaf.
    pub fn text(style: Style, content: impl Into<String>) -> OgResult<Self> {
        check_scope(&style, AttrScope::Text, "text")?;
        if style.font_size.is_none() {
            return Err(OgError::configuration("text nodes must declare fontSize"));
        }
        Ok(Self::Text {
            style,
            content: content.into(),
        })
    }

    /// Style of either node kind.
    pub fn style(&self) -> &Style {
        match self {
            LayoutNode::Box { style, .. } | LayoutNode::Text { style, .. } => style,
        }
    }

    /// Children of a box; empty for text.
    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Box { children, .. } => children,
            LayoutNode::Text { .. } => &[],
        }
    }

    /// Text content, if this is a text leaf.
    pub fn content(&self) -> Option<&str> {
        match self {
            LayoutNode::Text { content, .. } => Some(content),
            LayoutNode::Box { .. } => None,
        }
    }

    /// Depth-first pre-order walk over the subtree, including `self`.
    pub fn walk(&self) -> Vec<&LayoutNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(n.children().iter().rev());
        }
        out
    }

    /// Text contents of the subtree in render order.
    pub fn texts(&self) -> Vec<&str> {
        self.walk()
            .into_iter()
            .filter_map(|n| n.content())
            .collect()
    }
}

fn check_scope(style: &Style, kind: AttrScope, kind_name: &str) -> OgResult<()> {
    for attr in style.attrs() {
        let scope = attr.scope();
        if scope != AttrScope::Any && scope != kind {
            return Err(OgError::configuration(format!(
                "style attribute '{}' is not allowed on {kind_name} nodes",
                attr.name()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/node.rs"]
mod tests;
