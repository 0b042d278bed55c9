//! Serializable snapshot of a node for template evaluation.

use serde::{Deserialize, Serialize};

use crate::tree::{usage_token, Node};

/// What templates see of a [`Node`].
///
/// Templates receive plain data, and template functions receive it back
/// through deserialization, so everything a function needs about a node
/// (its visible subtree, which child is the default) is captured here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
    #[serde(default)]
    pub options: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    /// Whether this node is its parent's default child.
    #[serde(default)]
    pub is_default: bool,
    /// Name of this node's default child.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeView>,
}

impl NodeView {
    pub fn of(node: &Node) -> Self {
        Self::build(node, false)
    }

    fn build(node: &Node, is_default: bool) -> Self {
        Self {
            name: node.name().to_string(),
            aliases: node.aliases().to_vec(),
            short: node.short().filter(|s| !s.is_empty()).map(String::from),
            long: node.long().map(String::from),
            options: node.options().filter(|s| !s.is_empty()).map(String::from),
            hidden: node.is_hidden(),
            is_default,
            default: node.default_child().map(|d| d.name().to_string()),
            children: node
                .children()
                .map(|c| Self::build(c, node.is_default(c)))
                .collect(),
        }
    }

    pub fn has_visible_children(&self) -> bool {
        self.children.iter().any(|c| !c.hidden)
    }

    /// Aliases then name, pipe-joined.
    pub fn usage_token(&self) -> String {
        usage_token(&self.name, &self.aliases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_marks_default_child() {
        let root = Node::builder("root")
            .child(Node::builder("a").build().unwrap())
            .child(Node::builder("b").short("bee").build().unwrap())
            .default_child("b")
            .build()
            .unwrap();
        let view = NodeView::of(&root);
        assert_eq!(view.default.as_deref(), Some("b"));
        assert!(!view.children[0].is_default);
        assert!(view.children[1].is_default);
        assert_eq!(view.children[1].short.as_deref(), Some("bee"));
    }

    #[test]
    fn test_view_keeps_hidden_children_flagged() {
        let root = Node::builder("root")
            .child(Node::builder("secret").build().unwrap().as_hidden())
            .build()
            .unwrap();
        let view = NodeView::of(&root);
        assert_eq!(view.children.len(), 1);
        assert!(view.children[0].hidden);
        assert!(!view.has_visible_children());
    }

    #[test]
    fn test_empty_short_is_absent() {
        let node = Node::builder("x").short("").build().unwrap();
        assert!(NodeView::of(&node).short.is_none());
    }
}
