//! Lays out a hierarchy and draws it into a tree container.

use std::collections::HashMap;

use kurbo::Point;
use tracing::{debug, instrument};

use crate::config::CanvasConfig;
use crate::domain::{HierarchyNode, TidyTreeLayout, TreeLayout};
use crate::view::container::TreeContainer;
use crate::view::figure::{EdgeShape, NodeShape, TreeFigure};

/// Draws trees on a fixed canvas; the layout algorithm is pluggable.
pub struct TreeRenderer {
    canvas: CanvasConfig,
    layout: Box<dyn TreeLayout>,
}

impl TreeRenderer {
    /// Renderer using the tidy-tree layout sized to the canvas interior.
    pub fn new(canvas: CanvasConfig) -> Self {
        let layout = TidyTreeLayout::new(canvas.inner_width(), canvas.inner_height());
        Self::with_layout(canvas, Box::new(layout))
    }

    pub fn with_layout(canvas: CanvasConfig, layout: Box<dyn TreeLayout>) -> Self {
        Self { canvas, layout }
    }

    /// Append one figure titled `title` to `target`.
    ///
    /// Existing figures are left alone; clearing is the caller's job.
    #[instrument(level = "debug", skip(self, root, target))]
    pub fn render(&self, root: &HierarchyNode, target: &mut TreeContainer, title: &str) {
        let tree = self.layout.layout(root);

        let mut positions = HashMap::with_capacity(tree.len());
        let mut nodes = Vec::with_capacity(tree.len());
        for (idx, node) in tree.iter() {
            positions.insert(idx, nodes.len());
            nodes.push(NodeShape {
                center: Point::new(node.x, node.y),
                radius: self.canvas.node_radius,
                label: node.data.name.clone(),
                category: node.data.category,
                depth: node.depth,
                parent: node.parent.and_then(|p| positions.get(&p).copied()),
            });
        }

        let edges: Vec<_> = tree
            .links()
            .into_iter()
            .map(|(parent, child)| {
                EdgeShape::vertical(Point::new(parent.x, parent.y), Point::new(child.x, child.y))
            })
            .collect();

        debug!(nodes = nodes.len(), edges = edges.len(), "rendered tree");
        target.push(TreeFigure {
            title: title.to_string(),
            width: self.canvas.width,
            height: self.canvas.height,
            margin: self.canvas.margin,
            nodes,
            edges,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{normalize, AstNode, NodeCategory};

    #[test]
    fn test_figure_carries_title_canvas_and_categories() {
        let ast = AstNode::branch(
            "+",
            Some(AstNode::leaf("number", "1")),
            Some(AstNode::leaf("identifier", "y")),
        );
        let renderer = TreeRenderer::new(CanvasConfig::default());
        let mut container = TreeContainer::new();
        renderer.render(&normalize(Some(&ast)).unwrap(), &mut container, "Line 1 AST");

        let figure = &container.figures()[0];
        assert_eq!(figure.title, "Line 1 AST");
        assert_eq!((figure.width, figure.height), (400.0, 400.0));
        let categories: Vec<_> = figure.nodes.iter().map(|n| n.category).collect();
        assert_eq!(
            categories,
            vec![NodeCategory::Operator, NodeCategory::Number, NodeCategory::Identifier]
        );
        assert_eq!(figure.nodes[1].parent, Some(0));
        assert_eq!(figure.canvas_position(&figure.nodes[0]), Point::new(200.0, 20.0));
    }
}
