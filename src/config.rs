use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::options::{self, DEFAULT_TARGETS};

pub const API_URL: &str = "https://www.toptal.com/developers/gitignore/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Entries appended to every generated `.gitignore`, each as `<entry>/`.
pub const EXTRA_IGNORES: [&str; 2] = [".idea", ".vscode"];

/// Runtime settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub default_targets: Vec<String>,
    pub extra_ignores: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_targets: DEFAULT_TARGETS.iter().map(ToString::to_string).collect(),
            extra_ignores: EXTRA_IGNORES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Reads `PYINIT_API_URL`, `PYINIT_TIMEOUT_SECS` and `PYINIT_DEFAULT_TARGETS`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = var("PYINIT_API_URL") {
            config.api_url = url;
        }
        config.api_url = config.api_url.trim_end_matches('/').to_string();
        if config.api_url.is_empty() {
            bail!("PYINIT_API_URL is empty");
        }

        if let Some(secs) = var("PYINIT_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("invalid PYINIT_TIMEOUT_SECS '{secs}'"))?;
            if secs == 0 {
                bail!("PYINIT_TIMEOUT_SECS must be greater than zero");
            }
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(targets) = var("PYINIT_DEFAULT_TARGETS") {
            config.default_targets = options::normalize([targets]);
        }

        Ok(config)
    }
}
