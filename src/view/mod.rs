//! Presentation layer: tree figures, SVG and HTML output
//!
//! Everything here is pure string/scene building; writing files is left to services.

pub mod container;
pub mod figure;
pub mod output;
pub mod renderer;
pub mod report;
pub mod svg;

pub use container::TreeContainer;
pub use figure::{EdgeShape, NodeShape, TreeFigure};
pub use output::{
    Outcome, OutputView, NO_STEPS_PLACEHOLDER, NO_VARIABLES_PLACEHOLDER, VARIABLES_HEADING,
};
pub use renderer::TreeRenderer;
pub use report::render_report;
pub use svg::escape_xml;
