//! Integration tests for drawing hierarchies into a tree container.

use exprlens::config::CanvasConfig;
use exprlens::domain::{normalize, AstNode, HierarchyNode, NodeCategory};
use exprlens::view::{TreeContainer, TreeRenderer};

fn sample() -> HierarchyNode {
    let ast = AstNode::branch(
        "=",
        Some(AstNode::leaf("identifier", "x")),
        Some(AstNode::branch(
            "+",
            Some(AstNode::leaf("number", "1")),
            Some(AstNode::leaf("number", "2")),
        )),
    );
    normalize(Some(&ast)).unwrap()
}

#[test]
fn given_tree_of_n_nodes_when_render_then_n_shapes_and_n_minus_one_edges() {
    let renderer = TreeRenderer::new(CanvasConfig::default());
    let mut container = TreeContainer::new();

    renderer.render(&sample(), &mut container, "Line 1 AST");

    assert_eq!(container.len(), 1);
    assert_eq!(container.node_shape_count(), 5);
    assert_eq!(container.edge_count(), 4);
    let figure = &container.figures()[0];
    assert_eq!(figure.title, "Line 1 AST");
    assert_eq!(figure.width, 400.0);
    assert_eq!(figure.height, 400.0);
}

#[test]
fn given_existing_figure_when_render_again_then_appended() {
    let renderer = TreeRenderer::new(CanvasConfig::default());
    let mut container = TreeContainer::new();

    renderer.render(&sample(), &mut container, "Line 1 AST");
    renderer.render(&sample(), &mut container, "Line 2 AST");

    assert_eq!(container.len(), 2);
    assert_eq!(container.node_shape_count(), 10);

    container.clear();
    assert!(container.is_empty());
}

#[test]
fn given_rendered_tree_when_inspect_shapes_then_labels_and_categories_match() {
    let renderer = TreeRenderer::new(CanvasConfig::default());
    let mut container = TreeContainer::new();

    renderer.render(&sample(), &mut container, "Line 1 AST");

    let figure = &container.figures()[0];
    let labels: Vec<_> = figure.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, vec!["=", "x", "+", "1", "2"]);
    assert_eq!(figure.nodes[0].category, NodeCategory::Assignment);
    assert_eq!(figure.nodes[0].parent, None);
    assert_eq!(figure.nodes[3].parent, Some(2));
    assert!(figure.nodes.iter().all(|n| n.radius == 20.0));
}

#[test]
fn given_rendered_tree_when_to_svg_then_one_group_per_node() {
    let renderer = TreeRenderer::new(CanvasConfig::default());
    let mut container = TreeContainer::new();
    renderer.render(&sample(), &mut container, "Line 1 AST");

    let svg = container.figures()[0].to_svg();

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<svg xmlns"));
    assert_eq!(svg.matches("<circle").count(), 5);
    assert_eq!(svg.matches("class=\"link\"").count(), 4);
    assert!(svg.contains("class=\"node assignment\""));
}

#[test]
fn given_rendered_tree_when_text_tree_then_nested_labels() {
    let renderer = TreeRenderer::new(CanvasConfig::default());
    let mut container = TreeContainer::new();
    renderer.render(&sample(), &mut container, "Line 1 AST");

    let text = container.figures()[0].to_text_tree().to_string();

    assert!(text.starts_with("= (assignment)"));
    assert!(text.contains("x (identifier)"));
    assert!(text.contains("1 (number)"));
}
