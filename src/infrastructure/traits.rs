//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

/// Raw answer of the optimizer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerReply {
    /// HTTP status code
    pub status: u16,
    /// Response body, uninterpreted
    pub body: String,
}

impl OptimizerReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Remote optimizer abstraction.
pub trait OptimizerClient: Send + Sync {
    /// Submit the raw (possibly multi-line) expression.
    ///
    /// Returns `Err` only when no HTTP response was received (connect error,
    /// timeout). Non-2xx answers are returned as replies.
    fn optimize(&self, expression: &str) -> Result<OptimizerReply, String>;
}

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Create directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create parent directories if needed.
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_reply_success_range() {
        assert!(OptimizerReply::new(200, "").is_success());
        assert!(OptimizerReply::new(204, "").is_success());
        assert!(!OptimizerReply::new(302, "").is_success());
        assert!(!OptimizerReply::new(500, "").is_success());
    }

    #[test]
    fn test_ensure_parent_creates_missing_dirs() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("a/b/tree.svg");
        let fs = RealFileSystem;
        fs.ensure_parent(&target).unwrap();
        fs.write(&target, "<svg/>").unwrap();
        assert_eq!(fs.read_to_string(&target).unwrap(), "<svg/>");
    }
}
