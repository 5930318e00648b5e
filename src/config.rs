use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::interactive_ratatui::application::backend::PaletteBackend;
use crate::interactive_ratatui::application::demo_backend::DemoBackend;
use crate::interactive_ratatui::application::http_backend::HttpBackend;
use crate::interactive_ratatui::constants::{DEFAULT_IDEA_COUNT, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteConfig {
    pub api_url: Option<String>,
    pub demo: bool,
    pub timeout: Duration,
    pub idea_count: usize,
    pub log_file: PathBuf,
    pub verbose: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            demo: false,
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            idea_count: DEFAULT_IDEA_COUNT,
            log_file: default_log_file(),
            verbose: false,
        }
    }
}

impl PaletteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.idea_count == 0 {
            bail!("--idea-count must be at least 1");
        }
        if self.timeout.is_zero() {
            bail!("--timeout-secs must be at least 1");
        }
        if let Some(url) = &self.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("--api-url must start with http:// or https://, got {url}");
            }
        }
        Ok(())
    }

    /// The backend selected by the configuration. `--demo` wins over `--api-url`.
    pub fn build_backend(&self) -> Result<Arc<dyn PaletteBackend>> {
        self.validate()?;

        if self.demo {
            tracing::info!("Using offline demo backend");
            return Ok(Arc::new(DemoBackend::default()));
        }

        let Some(url) = &self.api_url else {
            bail!("No backend configured: pass --api-url (or OMNIPALETTE_API_URL) or --demo");
        };

        let backend = HttpBackend::new(url, self.timeout)
            .with_context(|| format!("Failed to create HTTP client for {url}"))?;
        tracing::info!(base_url = backend.base_url(), "Using HTTP backend");
        Ok(Arc::new(backend))
    }
}

pub fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("omnipalette")
        .join("omnipalette.log")
}
