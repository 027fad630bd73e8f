//! SVG serialization of tree figures.

use std::fmt::Write as _;

use crate::view::figure::TreeFigure;

/// Styles for links and node categories, shared with the HTML report.
pub const TREE_STYLE: &str = "\
.link { fill: none; stroke: #9aa5b1; stroke-width: 2px; }
.node circle { stroke: #1f2933; stroke-width: 1.5px; }
.node.operator circle { fill: #d64545; }
.node.assignment circle { fill: #7b5ea7; }
.node.number circle { fill: #2f80ed; }
.node.identifier circle { fill: #27ae60; }
.node.other circle { fill: #616e7c; }
.node text { font-family: sans-serif; font-size: 14px; }
";

/// Escape text for XML/HTML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl TreeFigure {
    /// Standalone SVG document with embedded styles.
    pub fn to_svg(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write_svg(&mut out, true);
        out
    }

    /// `<svg>` element for inlining into HTML (styles come from the page).
    pub fn to_svg_fragment(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out, false);
        out
    }

    fn write_svg(&self, out: &mut String, standalone: bool) {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(out, "  <title>{}</title>", escape_xml(&self.title));
        if standalone {
            let _ = writeln!(out, "  <style>\n{}  </style>", TREE_STYLE);
        }
        let origin = self.origin();
        let _ = writeln!(out, r#"  <g transform="translate({},{})">"#, origin.x, origin.y);
        for edge in &self.edges {
            let _ = writeln!(out, r#"    <path class="link" d="{}"/>"#, edge.path.to_svg());
        }
        for node in &self.nodes {
            let _ = writeln!(
                out,
                r#"    <g class="node {}" transform="translate({},{})">"#,
                node.category.css_class(),
                node.center.x,
                node.center.y
            );
            let _ = writeln!(out, r#"      <circle r="{}"/>"#, node.radius);
            let _ = writeln!(
                out,
                r#"      <text dy="0.35em" text-anchor="middle" style="fill: white; font-weight: bold">{}</text>"#,
                escape_xml(&node.label)
            );
            let _ = writeln!(out, "    </g>");
        }
        let _ = writeln!(out, "  </g>");
        let _ = writeln!(out, "</svg>");
    }
}
