//! Writes rendered output to disk and reads expressions from files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};
use crate::infrastructure::traits::FileSystem;
use crate::view::{render_report, OutputView};

/// File name for a figure title, e.g. `Line 2 AST` → `line-2-ast.svg`.
pub fn svg_file_name(title: &str) -> String {
    let slug: Vec<String> = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    if slug.is_empty() {
        "tree.svg".to_string()
    } else {
        format!("{}.svg", slug.join("-"))
    }
}

/// Service for exporting session output.
pub struct ExportService {
    fs: Arc<dyn FileSystem>,
}

impl ExportService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read an expression file.
    pub fn read_expression(&self, path: &Path) -> ApplicationResult<String> {
        self.fs
            .read_to_string(path)
            .with_path_context("read expression", path)
    }

    /// Write one standalone SVG per rendered tree into `dir`.
    ///
    /// Returns the written paths in render order.
    pub fn write_svgs(&self, view: &OutputView, dir: &Path) -> ApplicationResult<Vec<PathBuf>> {
        self.fs
            .create_dir_all(dir)
            .with_path_context("create svg directory", dir)?;
        let mut written = Vec::with_capacity(view.trees.len());
        for figure in view.trees.figures() {
            let path = dir.join(svg_file_name(&figure.title));
            debug!("write_svgs: {}", path.display());
            self.fs
                .write(&path, &figure.to_svg())
                .with_path_context("write svg", &path)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Write the HTML report for the view.
    pub fn write_report(
        &self,
        view: &OutputView,
        expression: &str,
        path: &Path,
    ) -> ApplicationResult<()> {
        self.fs
            .ensure_parent(path)
            .with_path_context("create report directory", path)?;
        self.fs
            .write(path, &render_report(view, expression))
            .with_path_context("write report", path)
    }
}
