//! Generic ordered-children hierarchy used for layout and drawing.

use std::fmt;

use tracing::instrument;

use crate::domain::ast::AstNode;

/// Visual category of a node, derived from its lower-cased `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Number,
    Identifier,
    Operator,
    Assignment,
    /// Fallback for unrecognized node types
    Other,
}

impl NodeCategory {
    pub fn from_type(node_type: &str) -> Self {
        match node_type.trim().to_lowercase().as_str() {
            "number" | "num" | "constant" | "literal" => Self::Number,
            "identifier" | "ident" | "variable" | "var" | "name" => Self::Identifier,
            "+" | "-" | "*" | "/" | "op" | "operator" | "binop" | "binaryop" => Self::Operator,
            "=" | "assign" | "assignment" => Self::Assignment,
            _ => Self::Other,
        }
    }

    /// Class name for styling (`node <class>`).
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Identifier => "identifier",
            Self::Operator => "operator",
            Self::Assignment => "assignment",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Display tree node.
///
/// `children` is `None` for a leaf, never an empty vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub name: String,
    pub node_type: String,
    pub children: Option<Vec<HierarchyNode>>,
}

impl HierarchyNode {
    pub fn category(&self) -> NodeCategory {
        NodeCategory::from_type(&self.node_type)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> &[HierarchyNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of levels, a single node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }
}

/// Convert a binary AST into a variable-arity display hierarchy.
///
/// `None` propagates unchanged. A missing side is dropped, so a right-only node
/// becomes a single-child node.
#[instrument(level = "trace", skip(node))]
pub fn normalize(node: Option<&AstNode>) -> Option<HierarchyNode> {
    let node = node?;
    let children = if node.is_leaf() {
        None
    } else {
        Some(
            [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .filter_map(normalize)
                .collect(),
        )
    };
    Some(HierarchyNode {
        name: node.value.clone().unwrap_or_else(|| node.node_type.clone()),
        node_type: node.node_type.clone(),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Number", NodeCategory::Number)]
    #[case("identifier", NodeCategory::Identifier)]
    #[case("+", NodeCategory::Operator)]
    #[case("Op", NodeCategory::Operator)]
    #[case("=", NodeCategory::Assignment)]
    #[case("Call", NodeCategory::Other)]
    fn test_category_from_type(#[case] node_type: &str, #[case] expected: NodeCategory) {
        assert_eq!(NodeCategory::from_type(node_type), expected);
    }

    #[test]
    fn test_depth_and_count() {
        let ast = AstNode::branch(
            "+",
            Some(AstNode::leaf("number", "1")),
            Some(AstNode::branch(
                "*",
                Some(AstNode::leaf("number", "2")),
                Some(AstNode::leaf("identifier", "x")),
            )),
        );
        let root = normalize(Some(&ast)).unwrap();
        assert_eq!(root.node_count(), 5);
        assert_eq!(root.depth(), 3);
    }
}
