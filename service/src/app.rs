use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::render::{FORMATS, FormatSpec};

/// Application state shared by all axum handlers.
///
/// Read-only after startup; cloning only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration the server was started with
    config: ServiceConfig,
    /// Routing table
    formats: &'static [FormatSpec],
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                formats: &FORMATS,
            }),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    pub fn formats(&self) -> &'static [FormatSpec] {
        self.inner.formats
    }

    /// Look up the format served on `path`.
    pub fn format(&self, path: &str) -> Option<&'static FormatSpec> {
        self.inner.formats.iter().find(|spec| spec.path == path)
    }
}
