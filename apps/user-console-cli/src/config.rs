use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use user_console::UserConsoleConfig;

/// Prefix of environment overrides; `__` separates nested keys, e.g.
/// `USER_CONSOLE__CONSOLE__DEFAULT_PAGE_SIZE=25`.
pub const ENV_PREFIX: &str = "USER_CONSOLE__";

/// Effective configuration of the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub console: UserConsoleConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn` or `info,user_console=debug`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// JSON array of user records backing the in-memory directory.
    pub users_file: Option<PathBuf>,
}

impl AppConfig {
    /// Layered load: defaults, then the YAML file (if given), then
    /// `USER_CONSOLE__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Self = figment
            .extract()
            .context("Failed to load user console configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Command-line flags win over every other layer.
    pub fn apply_cli_overrides(&mut self, users_file: Option<&Path>) {
        if let Some(path) = users_file {
            self.data.users_file = Some(path.to_path_buf());
        }
    }

    pub fn validate(&self) -> Result<()> {
        let console = &self.console;
        if console.max_page_size == 0 {
            anyhow::bail!("console.max_page_size must be at least 1");
        }
        if console.default_page_size == 0 || console.default_page_size > console.max_page_size {
            anyhow::bail!(
                "console.default_page_size must be between 1 and {}",
                console.max_page_size
            );
        }
        if console.max_display_name_length == 0 {
            anyhow::bail!("console.max_display_name_length must be at least 1");
        }
        Ok(())
    }

    pub fn users_file(&self) -> Result<&Path> {
        self.data
            .users_file
            .as_deref()
            .context("No users file configured (pass --users or set data.users_file)")
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).context("Failed to render configuration as YAML")
    }
}
