use config::{Config as ConfigLoader, Environment, File};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Default rewards API endpoint
pub const DEFAULT_API_URL: &str = "https://api.zerion.io/v1";
/// Default web app, used for overview links
pub const DEFAULT_APP_URL: &str = "https://app.zerion.io";
/// Chain id of the ZERO network
pub const DEFAULT_ZERO_CHAIN_ID: &str = "zero";
/// Prefix of environment variables overriding the file configuration
pub const ENV_PREFIX: &str = "ZERION_REWARDS";

/// Configuration for the rewards client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// Rewards API base URL
    pub api_url: String,
    /// API key sent in the Authorization header
    #[serde(default)]
    pub api_key: Option<String>,
    /// Web app base URL
    pub app_url: String,
    /// Chain id whose portfolio value is shown as ZERO
    pub zero_chain_id: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            app_url: DEFAULT_APP_URL.to_string(),
            zero_chain_id: DEFAULT_ZERO_CHAIN_ID.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl RewardsConfig {
    /// Set the API base URL
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let config: RewardsConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// Later sources win: a missing file is skipped and `ZERION_REWARDS_*`
    /// variables (e.g. `ZERION_REWARDS_API_KEY`) override both.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, Error> {
        let defaults = Self::default();
        let mut builder = ConfigLoader::builder()
            .set_default("api_url", defaults.api_url)?
            .set_default("app_url", defaults.app_url)?
            .set_default("zero_chain_id", defaults.zero_chain_id)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        Ok(settings.try_deserialize::<RewardsConfig>()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        // Create directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("zerion-rewards");
        path.push("config.toml");
        path
    }

    /// Link to the wallet overview page in the web app
    pub fn overview_url(&self, account: &str) -> String {
        format!(
            "{}/{}/overview",
            self.app_url.trim_end_matches('/'),
            account.trim()
        )
    }
}
