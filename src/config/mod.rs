use crate::constants::{self, env_vars};
use crate::error::AppError;
use crate::lineup::SideKeys;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
///
/// Loaded once at startup and handed to [`crate::DelClient`]; nothing mutates
/// it afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Device identifier sent to the mobile API.
    #[serde(default = "default_device_id")]
    pub device_id: String,
    /// Tournament used by mobile API calls that do not take one explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<i64>,
    /// Skip TLS certificate validation. Off unless explicitly enabled.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    pub urls: UrlConfig,
    #[serde(default)]
    pub shifts: ShiftConfig,
    #[serde(default)]
    pub roster: SideKeys,
}

/// Base URLs of the two backends.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct UrlConfig {
    /// Form-POST endpoint of the mobile API.
    pub mobile_api: String,
    /// Root of the web JSON API.
    pub del_api: String,
    /// Root used for top scorer listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pennydel_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ShiftConfig {
    /// Resource name appended to `matches/<id>/` when fetching shifts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_name: Option<String>,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_device_id() -> String {
    constants::DEFAULT_DEVICE_ID.to_string()
}

impl Config {
    /// Creates a configuration for the two required endpoints, everything
    /// else at its default.
    pub fn new(mobile_api: impl Into<String>, del_api: impl Into<String>) -> Self {
        Config {
            device_id: default_device_id(),
            tournament_id: None,
            accept_invalid_certs: false,
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
            urls: UrlConfig {
                mobile_api: mobile_api.into(),
                del_api: del_api.into(),
                base_url: None,
                pennydel_url: None,
            },
            shifts: ShiftConfig::default(),
            roster: SideKeys::default(),
        }
    }

    /// Loads configuration from the default config file location.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `DEL_MOBILE_API` / `DEL_API` / `DEL_BASE_URL` - Override endpoint URLs
    /// - `DEL_DEVICE_ID` - Override the device identifier
    /// - `DEL_TOURNAMENT_ID` - Override the tournament id
    /// - `DEL_LOG_FILE` - Override log file path
    /// - `DEL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `DEL_ACCEPT_INVALID_CERTS` - `true`/`1` disables certificate validation
    ///
    /// # Errors
    /// * `AppError::Config` - No config file and no endpoint environment variables,
    ///   or validation failed
    /// * `AppError::Io` / `AppError::TomlDeserialize` - The file could not be read
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            match (
                std::env::var(env_vars::MOBILE_API),
                std::env::var(env_vars::DEL_API),
            ) {
                (Ok(mobile_api), Ok(del_api)) => Config::new(mobile_api, del_api),
                _ => {
                    return Err(AppError::config_error(format!(
                        "No configuration file found at {config_path} and {} / {} are not set",
                        env_vars::MOBILE_API,
                        env_vars::DEL_API
                    )));
                }
            }
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies the `DEL_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(mobile_api) = std::env::var(env_vars::MOBILE_API) {
            self.urls.mobile_api = mobile_api;
        }

        if let Ok(del_api) = std::env::var(env_vars::DEL_API) {
            self.urls.del_api = del_api;
        }

        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            self.urls.base_url = Some(base_url);
        }

        if let Ok(device_id) = std::env::var(env_vars::DEVICE_ID) {
            self.device_id = device_id;
        }

        if let Some(tournament_id) = std::env::var(env_vars::TOURNAMENT_ID)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
        {
            self.tournament_id = Some(tournament_id);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(value) = std::env::var(env_vars::ACCEPT_INVALID_CERTS) {
            self.accept_invalid_certs = matches!(value.trim(), "1" | "true" | "TRUE" | "yes");
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Mobile API:");
        println!("{}", config.urls.mobile_api);
        println!("Web API:");
        println!("{}", config.urls.del_api);
        if let Some(base_url) = &config.urls.base_url {
            println!("Base URL:");
            println!("{base_url}");
        }
        println!("────────────────────────────────────");
        println!("Device Id: {}", config.device_id);
        match config.tournament_id {
            Some(id) => println!("Tournament Id: {id}"),
            None => println!("Tournament Id: (resolved at runtime)"),
        }
        println!(
            "Roster Keys: {} / {}",
            config.roster.home, config.roster.visitor
        );
        println!("HTTP Timeout: {} seconds", config.http_timeout_seconds);
        if config.accept_invalid_certs {
            println!("TLS certificate validation: DISABLED");
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/del_app_helper.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a file path, creating the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without applying environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
