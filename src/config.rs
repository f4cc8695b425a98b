//! Loading the OpenAI credential and endpoint settings from the environment.
//!
//! `.env` files are applied with `dotenvy`, which only fills in variables that
//! are not already set, so anything exported in the shell wins.

use crate::Error;
use std::env;
use std::path::Path;
use tracing::{debug, warn};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const ORG_ID_VAR: &str = "OPENAI_ORG_ID";
pub const PROJECT_ID_VAR: &str = "OPENAI_PROJECT_ID";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Settings for talking to OpenAI, read once at startup.
#[derive(Clone)]
pub struct Config {
    /// Not validated here; a missing key surfaces when a request is made.
    pub api_key: Option<String>,
    pub base_url: String,
    pub organization: Option<String>,
    pub project: Option<String>,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Load `.env` from the current directory or an ancestor, if there is one,
    /// then read the process environment.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => debug!("no .env file found"),
            Err(e) => warn!(error = %e, "ignoring unreadable .env file"),
        }
        Self::from_process_env()
    }

    /// Load the given env file, then read the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        dotenvy::from_path(path)
            .map_err(|e| Error::config(format!("failed to load {}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded env file");
        Ok(Self::from_process_env())
    }

    /// Read the process environment without touching any file.
    pub fn from_process_env() -> Self {
        Self {
            api_key: read_var(API_KEY_VAR),
            base_url: read_var(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            organization: read_var(ORG_ID_VAR),
            project: read_var(PROJECT_ID_VAR),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            project: None,
        }
    }
}

// Keep the key out of logs and panic messages.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("organization", &self.organization)
            .field("project", &self.project)
            .finish()
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Config::new("sk-test").with_base_url("http://localhost:8080");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.organization.is_none());
        assert!(config.project.is_none());
    }

    #[test]
    fn test_default_has_no_key() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", Config::new("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_missing_env_file_is_config_error() {
        let result = Config::from_env_file("/definitely/not/here/.env");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
