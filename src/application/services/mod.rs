//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (OptimizerClient, FileSystem)
//! but are themselves concrete structs, not traits.

mod export;
mod session;

pub use export::{svg_file_name, ExportService};
pub use session::{parse_response, Session};
