//! Visual containers filled by the renderer.

use crate::view::figure::TreeFigure;

/// Holds one figure per rendered tree, in render order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TreeContainer {
    figures: Vec<TreeFigure>,
}

impl TreeContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, figure: TreeFigure) {
        self.figures.push(figure);
    }

    pub fn clear(&mut self) {
        self.figures.clear();
    }

    pub fn figures(&self) -> &[TreeFigure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Node shapes across all figures.
    pub fn node_shape_count(&self) -> usize {
        self.figures.iter().map(|f| f.nodes.len()).sum()
    }

    /// Edges across all figures.
    pub fn edge_count(&self) -> usize {
        self.figures.iter().map(|f| f.edges.len()).sum()
    }
}
