use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

use crate::domain::hierarchy::{HierarchyNode, NodeCategory};

/// Data payload for a positioned node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// Label drawn inside the node
    pub name: String,
    /// Raw node type as reported by the optimizer
    pub node_type: String,
    pub category: NodeCategory,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based layout structure.
#[derive(Debug)]
pub struct PositionedNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in drawing order
    pub children: Vec<Index>,
    /// Distance from the root
    pub depth: usize,
    pub x: f64,
    pub y: f64,
}

/// Arena-based tree holding one layout pass.
///
/// Uses a generational arena for memory-safe node references and O(1) lookups.
#[derive(Debug)]
pub struct PositionedTree {
    arena: Arena<PositionedNode>,
    root: Option<Index>,
}

impl Default for PositionedTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionedTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Copy a hierarchy into the arena in pre-order; all positions start at the origin.
    #[instrument(level = "debug", skip(hierarchy))]
    pub fn from_hierarchy(hierarchy: &HierarchyNode) -> Self {
        let mut tree = Self::new();
        let mut pending = vec![(hierarchy, None)];
        while let Some((node, parent)) = pending.pop() {
            let idx = tree.insert_node(
                NodeData {
                    name: node.name.clone(),
                    node_type: node.node_type.clone(),
                    category: node.category(),
                },
                parent,
            );
            // Reverse so the leftmost child is inserted (and attached) first
            for child in node.children().iter().rev() {
                pending.push((child, Some(idx)));
            }
        }
        tree
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let depth = parent
            .and_then(|p| self.arena.get(p))
            .map(|p| p.depth + 1)
            .unwrap_or(0);
        let node = PositionedNode {
            data,
            parent,
            children: Vec::new(),
            depth,
            x: 0.0,
            y: 0.0,
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&PositionedNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut PositionedNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    /// All nodes in pre-order.
    pub fn descendants(&self) -> Vec<&PositionedNode> {
        self.iter().map(|(_, node)| node).collect()
    }

    /// One `(parent, child)` pair per edge, in pre-order of the child.
    pub fn links(&self) -> Vec<(&PositionedNode, &PositionedNode)> {
        self.iter()
            .filter_map(|(_, node)| {
                let parent = self.get_node(node.parent?)?;
                Some((parent, node))
            })
            .collect()
    }

    /// Deepest level reached, the root being level 0.
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        self.iter().map(|(_, node)| node.depth).max().unwrap_or(0)
    }

    /// Labels of nodes without children, left to right.
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(_, node)| node.data.name.clone())
            .collect()
    }
}

pub struct TreeIterator<'a> {
    tree: &'a PositionedTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a PositionedTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a PositionedNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a PositionedTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a PositionedTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, false));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a PositionedNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for &child in node.children.iter().rev() {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
