//! Tidy-tree layout.
//!
//! Positions are computed in separation units first (siblings 1 apart,
//! neighbours with different parents 2 apart) and then scaled into the
//! requested size, so large trees compress instead of growing the canvas.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::PositionedTree;
use crate::domain::hierarchy::HierarchyNode;

/// Horizontal extent of a subtree per level, relative to the subtree root.
type Contour = Vec<(f64, f64)>;

/// Assigns 2D coordinates to every node of a hierarchy.
pub trait TreeLayout: Send + Sync {
    fn layout(&self, root: &HierarchyNode) -> PositionedTree;
}

/// Top-down tidy tree: parents centered over their children, subtrees never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TidyTreeLayout {
    pub width: f64,
    pub height: f64,
}

impl TidyTreeLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl TreeLayout for TidyTreeLayout {
    #[instrument(level = "debug", skip(self, root), fields(width = self.width, height = self.height))]
    fn layout(&self, root: &HierarchyNode) -> PositionedTree {
        let mut tree = PositionedTree::from_hierarchy(root);
        let offsets = relative_offsets(&tree);

        // Pre-order guarantees a parent is placed before its children
        let mut absolute: HashMap<Index, f64> = HashMap::with_capacity(tree.len());
        let order: Vec<(Index, Option<Index>)> =
            tree.iter().map(|(idx, node)| (idx, node.parent)).collect();
        for &(idx, parent) in &order {
            let base = parent.and_then(|p| absolute.get(&p)).copied().unwrap_or(0.0);
            let offset = offsets.get(&idx).copied().unwrap_or(0.0);
            absolute.insert(idx, base + offset);
        }

        let (left, right) = extremes(&order, &absolute);
        let left_x = absolute.get(&left).copied().unwrap_or(0.0);
        let right_x = absolute.get(&right).copied().unwrap_or(0.0);
        let same_parent = tree.get_node(left).map(|n| n.parent) == tree.get_node(right).map(|n| n.parent);
        let s = if same_parent { 0.5 } else { 1.0 };
        let tx = s - left_x;
        let kx = self.width / (right_x + s + tx);
        let ky = self.height / tree.max_depth().max(1) as f64;
        debug!(nodes = tree.len(), kx, ky, "scaling layout");

        for (idx, x) in absolute {
            if let Some(node) = tree.get_node_mut(idx) {
                node.x = (x + tx) * kx;
                node.y = node.depth as f64 * ky;
            }
        }
        tree
    }
}

fn separation(level: usize) -> f64 {
    if level == 0 {
        1.0
    } else {
        2.0
    }
}

/// Offset of every node relative to its parent, in separation units.
fn relative_offsets(tree: &PositionedTree) -> HashMap<Index, f64> {
    let mut contours: HashMap<Index, Contour> = HashMap::new();
    let mut offsets: HashMap<Index, f64> = HashMap::new();
    let order: Vec<(Index, Vec<Index>)> = tree
        .iter_postorder()
        .map(|(idx, node)| (idx, node.children.clone()))
        .collect();

    for (idx, children) in order {
        let (first, last) = match (children.first(), children.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => {
                contours.insert(idx, vec![(0.0, 0.0)]);
                continue;
            }
        };

        let mut placed: HashMap<Index, f64> = HashMap::with_capacity(children.len());
        let mut merged: Contour = Vec::new();
        for &child in &children {
            let contour = contours.remove(&child).unwrap_or_else(|| vec![(0.0, 0.0)]);
            let shift = if merged.is_empty() {
                0.0
            } else {
                merged
                    .iter()
                    .zip(&contour)
                    .enumerate()
                    .map(|(level, (&(_, right), &(left, _)))| right - left + separation(level))
                    .fold(f64::NEG_INFINITY, f64::max)
            };
            for (level, &(left, right)) in contour.iter().enumerate() {
                let (left, right) = (left + shift, right + shift);
                match merged.get_mut(level) {
                    Some(slot) => {
                        slot.0 = slot.0.min(left);
                        slot.1 = slot.1.max(right);
                    }
                    None => merged.push((left, right)),
                }
            }
            placed.insert(child, shift);
        }

        let mid = (placed[&first] + placed[&last]) / 2.0;
        for (child, x) in placed {
            offsets.insert(child, x - mid);
        }
        let mut contour = vec![(0.0, 0.0)];
        contour.extend(merged.into_iter().map(|(l, r)| (l - mid, r - mid)));
        contours.insert(idx, contour);
    }
    offsets
}

/// Leftmost and rightmost node, first match in pre-order wins.
fn extremes(order: &[(Index, Option<Index>)], absolute: &HashMap<Index, f64>) -> (Index, Index) {
    let mut left = order[0].0;
    let mut right = order[0].0;
    for &(idx, _) in order {
        if absolute[&idx] < absolute[&left] {
            left = idx;
        }
        if absolute[&idx] > absolute[&right] {
            right = idx;
        }
    }
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ast::AstNode;
    use crate::domain::hierarchy::normalize;

    fn layout(ast: &AstNode) -> PositionedTree {
        TidyTreeLayout::new(360.0, 360.0).layout(&normalize(Some(ast)).unwrap())
    }

    fn position(tree: &PositionedTree, name: &str) -> (f64, f64) {
        tree.iter()
            .find(|(_, n)| n.data.name == name)
            .map(|(_, n)| (n.x, n.y))
            .unwrap()
    }

    #[test]
    fn test_single_node_is_centered_at_top() {
        let tree = layout(&AstNode::leaf("number", "5"));
        assert_eq!(position(&tree, "5"), (180.0, 0.0));
    }

    #[test]
    fn test_two_leaves_split_width() {
        let tree = layout(&AstNode::branch(
            "+",
            Some(AstNode::leaf("number", "1")),
            Some(AstNode::leaf("number", "2")),
        ));
        // Two units wide including half a unit padding on each side
        assert_eq!(position(&tree, "1"), (90.0, 360.0));
        assert_eq!(position(&tree, "2"), (270.0, 360.0));
        assert_eq!(position(&tree, "+"), (180.0, 0.0));
    }

    #[test]
    fn test_cousins_are_two_units_apart() {
        let tree = layout(&AstNode::branch(
            "*",
            Some(AstNode::branch(
                "+",
                Some(AstNode::leaf("number", "1")),
                Some(AstNode::leaf("number", "2")),
            )),
            Some(AstNode::branch(
                "-",
                Some(AstNode::leaf("number", "3")),
                Some(AstNode::leaf("number", "4")),
            )),
        ));
        let (x1, _) = position(&tree, "1");
        let (x2, _) = position(&tree, "2");
        let (x3, _) = position(&tree, "3");
        assert!((x3 - x2 - 2.0 * (x2 - x1)).abs() < 1e-9);
    }
}
