//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{ExportService, Session};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, OptimizerClient, RealFileSystem};
use crate::infrastructure::{HttpOptimizerClient, InfraResult};
use crate::view::TreeRenderer;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Optimizer service abstraction
    pub client: Arc<dyn OptimizerClient>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> InfraResult<Self> {
        let client = HttpOptimizerClient::new(
            &settings.server.base_url,
            Duration::from_secs(settings.server.timeout_secs),
        )?;
        Ok(Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(client),
        ))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        client: Arc<dyn OptimizerClient>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            client,
        }
    }

    /// A fresh session drawing on the configured canvas.
    pub fn session(&self) -> Session {
        Session::new(
            Arc::clone(&self.client),
            TreeRenderer::new(self.settings.canvas),
        )
    }

    pub fn export_service(&self) -> ExportService {
        ExportService::new(Arc::clone(&self.fs))
    }
}
