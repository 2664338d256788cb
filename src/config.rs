//! Runtime settings
//!
//! Read from the environment (a `.env` file is honoured by the binaries
//! through `dotenv`).

use std::path::PathBuf;

use tracing::info;

use crate::catalog::Catalog;
use crate::classifier::IntentClassifier;
use crate::error::AssistantError;
use crate::Result;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// HTTP port for the API server
    pub port: u16,
    /// Optional JSON keyword catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").or_else(|| lookup("API_PORT")) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AssistantError::ConfigError(format!("PORT must be a number, got {:?}", raw))
            })?,
            None => DEFAULT_PORT,
        };

        let catalog_path = lookup("KEYWORD_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            port,
            catalog_path,
            log_filter,
        })
    }

    /// Load the configured catalog, falling back to the built-in one
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => {
                info!("Using built-in keyword catalog");
                Ok(Catalog::builtin())
            }
        }
    }

    pub fn build_classifier(&self) -> Result<IntentClassifier> {
        let catalog = self.load_catalog()?;
        let classifier = IntentClassifier::new(&catalog);

        info!(
            buckets = classifier.bucket_count(),
            fingerprint = %classifier.catalog_fingerprint(),
            "Classifier ready"
        );

        Ok(classifier)
    }
}
