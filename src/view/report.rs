//! Self-contained HTML report of one optimize run.

use std::fmt::Write as _;

use crate::view::output::{OutputView, VARIABLES_HEADING};
use crate::view::svg::{escape_xml, TREE_STYLE};

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; color: #1f2933; }
.tokens-line { margin: 0.25rem 0; }
.token { display: inline-block; padding: 0.1rem 0.4rem; margin: 0 0.15rem; border-radius: 4px; background: #e4e7eb; font-family: monospace; }
.token.line-number { background: none; font-weight: bold; }
.token.operator { background: #f8d7da; }
.token.equals { background: #e2d9f3; }
.token.number { background: #d6e9fb; }
.token.identifier { background: #d4f1df; }
#tree-container { display: flex; flex-wrap: wrap; gap: 1rem; }
.tree-wrapper { border: 1px solid #cbd2d9; border-radius: 6px; padding: 0.5rem; }
.tree-title { margin: 0 0 0.5rem 0; font-size: 1rem; }
.step { padding: 0.2rem 0; }
.variable { font-family: monospace; }
.error { color: #b42318; font-weight: bold; }
";

/// Render the whole view (tokens, trees, steps, variables or error) as HTML.
pub fn render_report(view: &OutputView, expression: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">\n<title>Expression Optimizer</title>");
    let _ = writeln!(out, "<style>\n{}{}</style>\n</head>\n<body>", PAGE_STYLE, TREE_STYLE);
    let _ = writeln!(out, "<h1>Expression Optimizer</h1>");
    let _ = writeln!(out, "<pre id=\"expression\">{}</pre>", escape_xml(expression));

    let _ = writeln!(out, "<h2>Tokens</h2>\n<div id=\"tokens-container\">");
    for line in &view.tokens {
        let _ = write!(
            out,
            "<div class=\"tokens-line\"><span class=\"token line-number\">{}</span>",
            escape_xml(&line.label())
        );
        for token in &line.tokens {
            let class = match token.kind {
                Some(kind) => format!("token {}", kind.css_class()),
                None => "token".to_string(),
            };
            let _ = write!(out, "<span class=\"{}\">{}</span>", class, escape_xml(&token.text));
        }
        let _ = writeln!(out, "</div>");
    }
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "<h2>Abstract Syntax Trees</h2>\n<div id=\"tree-container\">");
    for figure in view.trees.figures() {
        let _ = writeln!(
            out,
            "<div class=\"tree-wrapper\">\n<h3 class=\"tree-title\">{}</h3>\n{}</div>",
            escape_xml(&figure.title),
            figure.to_svg_fragment()
        );
    }
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "<h2>Optimization Steps</h2>\n<div id=\"steps\">");
    for step in view.step_lines() {
        let _ = writeln!(out, "<div class=\"step\">{}</div>", escape_xml(&step));
    }
    let _ = writeln!(out, "</div>");

    let _ = writeln!(out, "<div id=\"result\">");
    if let Some(error) = view.error_line() {
        let _ = writeln!(out, "<div class=\"error\">{}</div>", escape_xml(&error));
    } else {
        let variables = view.variable_lines();
        if !variables.is_empty() {
            let _ = writeln!(out, "<div class=\"variables\">\n<h3>{}</h3>", VARIABLES_HEADING);
            for variable in variables {
                let _ = writeln!(out, "<div class=\"variable\">{}</div>", escape_xml(&variable));
            }
            let _ = writeln!(out, "</div>");
        }
    }
    let _ = writeln!(out, "</div>\n</body>\n</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tokenize;
    use crate::view::output::Outcome;

    #[test]
    fn test_report_lists_tokens_steps_and_variables() {
        let view = OutputView {
            tokens: tokenize("x = (1 + 2)"),
            outcome: Outcome::Completed {
                steps: vec!["1 + 2 = 3".into()],
                variables: vec!["x = 3".into()],
            },
            ..OutputView::default()
        };
        let html = render_report(&view, "x = (1 + 2)");
        assert!(html.contains("<span class=\"token line-number\">Line 1:</span>"));
        assert!(html.contains("<span class=\"token identifier\">x</span>"));
        assert!(html.contains("<span class=\"token\">(</span>"));
        assert!(html.contains("<div class=\"step\">Step 1: 1 + 2 = 3</div>"));
        assert!(html.contains("<h3>Final Variable Values:</h3>"));
        assert!(html.contains("<div class=\"variable\">x = 3</div>"));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_report_shows_error_instead_of_variables() {
        let view = OutputView {
            outcome: Outcome::Failed {
                message: "optimizer request failed: HTTP status 500".into(),
            },
            ..OutputView::default()
        };
        let html = render_report(&view, "x = 1");
        assert!(html.contains(
            "<div class=\"error\">Error: optimizer request failed: HTTP status 500</div>"
        ));
        assert!(!html.contains("Final Variable Values"));
    }
}
