//! Integration tests for the tidy-tree layout.

use exprlens::domain::{normalize, AstNode, PositionedTree, TidyTreeLayout, TreeLayout};

fn lay_out(ast: &AstNode, width: f64, height: f64) -> PositionedTree {
    TidyTreeLayout::new(width, height).layout(&normalize(Some(ast)).unwrap())
}

fn chain(depth: usize) -> AstNode {
    (0..depth).fold(AstNode::leaf("number", "0"), |child, i| {
        AstNode::branch("-", None, Some(child)).with_value(format!("n{}", i))
    })
}

#[test]
fn given_any_tree_when_layout_then_nodes_stay_inside_area() {
    let ast = AstNode::branch(
        "=",
        Some(AstNode::leaf("identifier", "x")),
        Some(AstNode::branch(
            "+",
            Some(AstNode::branch(
                "*",
                Some(AstNode::leaf("number", "2")),
                Some(AstNode::leaf("number", "3")),
            )),
            Some(AstNode::leaf("identifier", "y")),
        )),
    );

    let tree = lay_out(&ast, 360.0, 360.0);

    for node in tree.descendants() {
        assert!((0.0..=360.0).contains(&node.x), "x out of range: {}", node.x);
        assert!((0.0..=360.0).contains(&node.y), "y out of range: {}", node.y);
    }
}

#[test]
fn given_parent_when_layout_then_centered_over_children() {
    let ast = AstNode::branch(
        "+",
        Some(AstNode::branch(
            "*",
            Some(AstNode::leaf("number", "2")),
            Some(AstNode::leaf("number", "3")),
        )),
        Some(AstNode::leaf("number", "4")),
    );

    let tree = lay_out(&ast, 360.0, 360.0);

    for node in tree.descendants() {
        if let (Some(&first), Some(&last)) = (node.children.first(), node.children.last()) {
            let first = tree.get_node(first).unwrap();
            let last = tree.get_node(last).unwrap();
            assert!((node.x - (first.x + last.x) / 2.0).abs() < 1e-9);
        }
    }
}

#[test]
fn given_deep_chain_when_layout_then_depth_spreads_over_height() {
    let tree = lay_out(&chain(4), 360.0, 360.0);

    assert_eq!(tree.max_depth(), 4);
    let mut ys: Vec<f64> = tree.descendants().iter().map(|n| n.y).collect();
    ys.sort_by(f64::total_cmp);
    assert_eq!(ys, vec![0.0, 90.0, 180.0, 270.0, 360.0]);
    // A single-child chain stays on one vertical line
    assert!(tree.descendants().iter().all(|n| (n.x - 180.0).abs() < 1e-9));
}

#[test]
fn given_siblings_when_layout_then_left_to_right_order_kept() {
    let ast = AstNode::branch(
        "+",
        Some(AstNode::leaf("number", "1")),
        Some(AstNode::leaf("number", "2")),
    );

    let tree = lay_out(&ast, 200.0, 100.0);
    let leaves: Vec<f64> = tree
        .descendants()
        .iter()
        .filter(|n| n.children.is_empty())
        .map(|n| n.x)
        .collect();

    assert!(leaves[0] < leaves[1]);
    assert_eq!(tree.leaf_names(), vec!["1", "2"]);
}
