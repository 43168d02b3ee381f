/// CLI configuration
use crate::error::{CliError, Result};
use roster_client::ApiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_login")]
    pub login: LoginSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as `x-api-key` when set
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginSettings {
    /// Pre-filled email of the login form
    #[serde(default = "default_email")]
    pub default_email: String,

    /// Pre-filled password of the login form
    #[serde(default = "default_password")]
    pub default_password: String,

    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl RosterConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; the default `roster.toml` is optional.
    /// `ROSTER_`-prefixed variables override the file, with `__` between
    /// nested keys (`ROSTER_API__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set ROSTER_API__BASE_URL)".to_string(),
            ));
        }

        let parsed = url::Url::parse(base_url)
            .map_err(|e| CliError::Config(format!("Invalid API base URL {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::Config(format!(
                "API base URL must use http or https, got {}",
                parsed.scheme()
            )));
        }

        if self.api.timeout_secs == 0 || self.api.connect_timeout_secs == 0 {
            return Err(CliError::Config(
                "API timeouts must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Client settings for [`roster_client::RosterClient`]
    pub fn api_config(&self) -> ApiConfig {
        let config = ApiConfig::new(self.api.base_url.trim()).with_timeouts(
            Duration::from_secs(self.api.timeout_secs),
            Duration::from_secs(self.api.connect_timeout_secs),
        );

        match self.api.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.login.redirect_delay_ms)
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            login: default_login(),
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        api_key: None,
        timeout_secs: default_timeout_secs(),
        connect_timeout_secs: default_connect_timeout_secs(),
    }
}

fn default_base_url() -> String {
    "https://reqres.in/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_login() -> LoginSettings {
    LoginSettings {
        default_email: default_email(),
        default_password: default_password(),
        redirect_delay_ms: default_redirect_delay_ms(),
    }
}

fn default_email() -> String {
    "eve.holt@reqres.in".to_string()
}

fn default_password() -> String {
    "cityslicka".to_string()
}

fn default_redirect_delay_ms() -> u64 {
    2000
}
