use std::{env, fs};
use std::path::{Path, PathBuf};
use serde::Deserialize;
use crate::errors::ConfigError;

const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: Api,
    pub db: Db,
    pub charts: Charts,
    pub logging: Logging,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Api {
    pub base_url: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key_env: "OPENWEATHER_API_KEY".to_string(),
            api_key: None,
        }
    }
}

impl Api {
    /// Returns the API key to use, the environment variable taking precedence over
    /// whatever key is given in the configuration file
    ///
    pub fn resolve_key(&self) -> Result<String, ConfigError> {
        match env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => self.api_key.clone()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| ConfigError(format!(
                    "no API key found, set {} or api.api_key in the configuration", self.api_key_env
                ))),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Db {
    pub db_path: PathBuf,
}

impl Default for Db {
    fn default() -> Self {
        Self { db_path: PathBuf::from("weather_data.db") }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Charts {
    pub width: u32,
    pub height: u32,
    pub scatter_combined_path: PathBuf,
    pub scatter_temperature_path: PathBuf,
    pub bar_temperature_path: PathBuf,
    pub bar_humidity_path: PathBuf,
    pub bar_wind_speed_path: PathBuf,
}

impl Default for Charts {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            scatter_combined_path: PathBuf::from("weather_chart_scatter_THW.png"),
            scatter_temperature_path: PathBuf::from("weather_chart_scatter_temp.png"),
            bar_temperature_path: PathBuf::from("weather_chart_bar_temp.png"),
            bar_humidity_path: PathBuf::from("weather_chart_bar_hum.png"),
            bar_wind_speed_path: PathBuf::from("weather_chart_bar_wspeed.png"),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Logging {
    pub log_path: PathBuf,
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("logs.txt"),
            level: "info".to_string(),
        }
    }
}

/// Returns the configuration, read from the file given by the CONFIG_PATH environment
/// variable or from config.toml in the working directory.
///
/// A missing configuration file is not an error, all settings then take their defaults.
///
pub fn config() -> Result<Config, ConfigError> {
    let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(Path::new(&config_path))
}

/// Loads configuration from the given path
///
/// # Arguments
///
/// * 'path' - path to a toml configuration file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let toml = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&toml)?;

    Ok(config)
}
