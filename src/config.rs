//! Storefront configuration and persisted user preferences.
//!
//! Resolution order: built-in defaults, then the JSON config file
//! (`storefront.json` in the data directory, or an explicit path), then
//! `STOREFRONT_*` environment variables. CLI flags are applied last by the
//! caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{Result, StorefrontError};
use crate::i18n::Language;

pub const DEFAULT_VENDOR_DOMAIN: &str = "tsdsolution.net";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const APP_DIR_NAME: &str = "menu-storefront";
const CONFIG_FILE: &str = "storefront.json";
const PREFERENCES_FILE: &str = "preferences.json";

pub const ENV_DOMAIN: &str = "STOREFRONT_DOMAIN";
pub const ENV_API_BASE: &str = "STOREFRONT_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "STOREFRONT_TIMEOUT_SECS";
pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";

/// Platform data directory for the storefront (logs, config, preferences).
pub fn default_data_dir() -> PathBuf {
    let base = std::env::var("LOCALAPPDATA")
        .or_else(|_| std::env::var("XDG_DATA_HOME"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            #[cfg(target_os = "windows")]
            {
                PathBuf::from(std::env::var("USERPROFILE").unwrap_or_else(|_| ".".into()))
                    .join("AppData")
                    .join("Local")
            }
            #[cfg(not(target_os = "windows"))]
            {
                PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()))
                    .join(".local")
                    .join("share")
            }
        });
    base.join(APP_DIR_NAME)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Tenants live at `https://{tenant}.{vendor_domain}`.
    pub vendor_domain: String,
    /// Fixed base URL that replaces the per-tenant host (self-hosted or local
    /// backends).
    pub api_base: Option<String>,
    pub request_timeout_secs: u64,
    pub data_dir: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            vendor_domain: DEFAULT_VENDOR_DOMAIN.to_string(),
            api_base: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: default_data_dir(),
        }
    }
}

impl StorefrontConfig {
    /// Defaults, then the config file (when present), then the environment.
    pub fn load(explicit_file: Option<&Path>) -> Result<Self> {
        let data_dir = std::env::var(ENV_DATA_DIR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let file = explicit_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(CONFIG_FILE));

        let mut config = if file.exists() {
            Self::from_file(&file)?
        } else {
            if explicit_file.is_some() {
                return Err(StorefrontError::Config(format!(
                    "config file {} does not exist",
                    file.display()
                )));
            }
            Self {
                data_dir,
                ..Self::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        debug!(
            vendor_domain = %config.vendor_domain,
            api_base = ?config.api_base,
            timeout_secs = config.request_timeout_secs,
            "config: resolved"
        );
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|e| StorefrontError::Config(format!("{}: {e}", path.display())))
    }

    /// Overlay `STOREFRONT_*` variables. `lookup` is `std::env::var` in
    /// production.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(domain) = read(ENV_DOMAIN) {
            self.vendor_domain = domain;
        }
        if let Some(base) = read(ENV_API_BASE) {
            self.api_base = Some(base);
        }
        if let Some(secs) = read(ENV_TIMEOUT_SECS) {
            self.request_timeout_secs = secs.parse().map_err(|_| {
                StorefrontError::Config(format!("{ENV_TIMEOUT_SECS} must be a number, got {secs:?}"))
            })?;
        }
        if let Some(dir) = read(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let domain = self.vendor_domain.trim();
        if domain.is_empty() && self.api_base.is_none() {
            return Err(StorefrontError::Config(
                "vendor domain is empty and no API base is set".into(),
            ));
        }
        if domain.contains('/') || domain.contains(' ') {
            return Err(StorefrontError::Config(format!(
                "vendor domain must be a bare host name, got {domain:?}"
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(StorefrontError::Config(
                "request timeout must be at least one second".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub language: Language,
}

/// Read saved preferences. Missing files and unknown values fall back to the
/// defaults.
pub fn load_preferences(data_dir: &Path) -> Preferences {
    let path = data_dir.join(PREFERENCES_FILE);
    let Ok(raw) = fs::read_to_string(&path) else {
        return Preferences::default();
    };
    let language = serde_json::from_str::<Value>(&raw)
        .ok()
        .and_then(|v| v.get("language").and_then(Value::as_str).map(str::to_string))
        .and_then(|code| match code.parse::<Language>() {
            Ok(lang) => Some(lang),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "preferences: ignoring saved language");
                None
            }
        })
        .unwrap_or_default();
    Preferences { language }
}

pub fn save_preferences(data_dir: &Path, preferences: &Preferences) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let body = serde_json::json!({ "language": preferences.language.code() });
    fs::write(data_dir.join(PREFERENCES_FILE), format!("{body:#}\n"))?;
    Ok(())
}
