//! Configuration file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_client::Endpoints;

use crate::i18n::Language;
use crate::model::state::toast::DEFAULT_TOAST_DURATION;
use crate::view::theme::Theme;

/// Directory under the platform config dir
const APP_DIR: &str = "storefront-tui";
const CONFIG_FILE: &str = "config.json";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value {value:?} for `{key}`")]
    InvalidValue { key: &'static str, value: String },
}

/// On-disk configuration; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    pub catalog_url: Option<String>,
    pub cart_url: Option<String>,
    pub media_base: Option<String>,
    pub language: Option<String>,
    pub theme: Option<String>,
    pub toast_duration_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

/// Effective application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoints: Endpoints,
    pub language: Language,
    pub theme: Theme,
    pub toast_duration: Duration,
    /// Whole-request timeout; `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            language: Language::EnUs,
            theme: Theme::Dark,
            toast_duration: DEFAULT_TOAST_DURATION,
            request_timeout: None,
        }
    }
}

impl AppConfig {
    /// Merge a config file over the defaults.
    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let language = match file.language {
            Some(code) => Language::from_code(&code).ok_or(ConfigError::InvalidValue {
                key: "language",
                value: code,
            })?,
            None => defaults.language,
        };
        let theme = match file.theme {
            Some(name) => Theme::from_name(&name).ok_or(ConfigError::InvalidValue {
                key: "theme",
                value: name,
            })?,
            None => defaults.theme,
        };

        Ok(Self {
            endpoints: Endpoints {
                catalog_url: file.catalog_url.unwrap_or(defaults.endpoints.catalog_url),
                cart_url: file.cart_url.unwrap_or(defaults.endpoints.cart_url),
                media_base: file.media_base.unwrap_or(defaults.endpoints.media_base),
            },
            language,
            theme,
            toast_duration: file
                .toast_duration_ms
                .map_or(defaults.toast_duration, Duration::from_millis),
            request_timeout: file.request_timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Configuration source
pub trait ConfigService: Send + Sync {
    /// Load the effective configuration
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// JSON file in the platform config directory
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// Use `path`, or the default location when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.or_else(Self::default_path),
        }
    }

    /// `<config_dir>/storefront-tui/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = &self.path else {
            log::info!("no config directory, using defaults");
            return Ok(AppConfig::default());
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no config file at {}, using defaults", path.display());
                return Ok(AppConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };

        let file: ConfigFile =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        log::info!("loaded config from {}", path.display());
        AppConfig::from_file(file)
    }
}
