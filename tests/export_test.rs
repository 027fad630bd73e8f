//! Integration tests for writing SVG files and the HTML report.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use exprlens::application::services::{svg_file_name, ExportService};
use exprlens::application::ApplicationError;
use exprlens::config::CanvasConfig;
use exprlens::domain::{normalize, tokenize, AstNode};
use exprlens::infrastructure::traits::RealFileSystem;
use exprlens::view::{Outcome, OutputView, TreeRenderer};

fn completed_view() -> OutputView {
    let renderer = TreeRenderer::new(CanvasConfig::default());
    let mut view = OutputView::new();
    view.tokens = tokenize("x = 1 + 2\ny = <x>");
    for (i, ast) in [
        AstNode::branch(
            "=",
            Some(AstNode::leaf("identifier", "x")),
            Some(AstNode::leaf("number", "3")),
        ),
        AstNode::leaf("identifier", "y"),
    ]
    .iter()
    .enumerate()
    {
        let root = normalize(Some(ast)).unwrap();
        renderer.render(&root, &mut view.trees, &format!("Line {} AST", i + 1));
    }
    view.outcome = Outcome::Completed {
        steps: vec!["Folded 1+2 to 3".to_string()],
        variables: vec!["x = 3".to_string()],
    };
    view
}

fn export() -> ExportService {
    ExportService::new(Arc::new(RealFileSystem))
}

#[test]
fn given_two_trees_when_write_svgs_then_one_file_per_tree() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("svg");

    let written = export().write_svgs(&completed_view(), &out).unwrap();

    assert_eq!(written, vec![out.join("line-1-ast.svg"), out.join("line-2-ast.svg")]);
    let first = fs::read_to_string(&written[0]).unwrap();
    assert!(first.contains("<title>Line 1 AST</title>"));
    assert_eq!(first.matches("<circle").count(), 3);
}

#[test]
fn given_completed_view_when_write_report_then_html_has_all_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/report.html");

    export()
        .write_report(&completed_view(), "x = 1 + 2\ny = <x>", &path)
        .unwrap();

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("Step 1: Folded 1+2 to 3"));
    assert!(html.contains("x = 3"));
    assert_eq!(html.matches("<svg").count(), 2);
    assert!(html.contains("&lt;x&gt;"));
    assert!(!html.contains("<x>"));
}

#[test]
fn given_missing_file_when_read_expression_then_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.txt");

    let err = export().read_expression(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn given_titles_when_svg_file_name_then_slugged() {
    assert_eq!(svg_file_name("Line 10 AST"), "line-10-ast.svg");
    assert_eq!(svg_file_name("a/b"), "a-b.svg");
}
