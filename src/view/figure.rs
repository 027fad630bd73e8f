//! Drawable scene of one rendered tree.

use kurbo::{BezPath, Point, Vec2};
use termtree::Tree;

use crate::config::Margin;
use crate::domain::NodeCategory;

/// A labeled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    /// Center in layout coordinates (inside the margins)
    pub center: Point,
    pub radius: f64,
    pub label: String,
    pub category: NodeCategory,
    pub depth: usize,
    /// Position of the parent shape in the figure's node list
    pub parent: Option<usize>,
}

/// Curved connection from a parent to a child.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeShape {
    pub source: Point,
    pub target: Point,
    pub path: BezPath,
}

impl EdgeShape {
    /// Vertical link: a cubic whose control points sit at the vertical midpoint.
    pub fn vertical(source: Point, target: Point) -> Self {
        let mid_y = (source.y + target.y) / 2.0;
        let mut path = BezPath::new();
        path.move_to(source);
        path.curve_to(Point::new(source.x, mid_y), Point::new(target.x, mid_y), target);
        Self {
            source,
            target,
            path,
        }
    }
}

/// One isolated tree drawing with its own title and canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeFigure {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    /// Pre-order, root first
    pub nodes: Vec<NodeShape>,
    pub edges: Vec<EdgeShape>,
}

impl TreeFigure {
    /// Translation applied to layout coordinates.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.margin.left, self.margin.top)
    }

    /// Center of a node in canvas coordinates.
    pub fn canvas_position(&self, node: &NodeShape) -> Point {
        node.center + self.origin()
    }

    fn children_of(&self, parent: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.parent == Some(parent))
            .map(|(idx, _)| idx)
    }

    /// Terminal rendition of the figure.
    pub fn to_text_tree(&self) -> Tree<String> {
        fn build(figure: &TreeFigure, idx: usize) -> Tree<String> {
            let node = &figure.nodes[idx];
            let leaves: Vec<_> = figure.children_of(idx).map(|c| build(figure, c)).collect();
            Tree::new(format!("{} ({})", node.label, node.category)).with_leaves(leaves)
        }

        if self.nodes.is_empty() {
            Tree::new("Empty tree".to_string())
        } else {
            build(self, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_vertical_link_control_points() {
        let edge = EdgeShape::vertical(Point::new(180.0, 0.0), Point::new(90.0, 360.0));
        let elements: Vec<_> = edge.path.elements().to_vec();
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(180.0, 0.0)));
        assert_eq!(
            elements[1],
            PathEl::CurveTo(
                Point::new(180.0, 180.0),
                Point::new(90.0, 180.0),
                Point::new(90.0, 360.0)
            )
        );
    }
}
