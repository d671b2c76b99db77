use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_chart::errors::ChartError;
use crate::manager_db::errors::DBError;
use crate::manager_openweather::errors::OpenWeatherError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Failure of one forecast run, tagged with the stage that failed
///
#[derive(Debug)]
pub enum RunError {
    Input(String),
    Config(String),
    Forecast(OpenWeatherError),
    Database(DBError),
    Chart(ChartError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Input(e) => write!(f, "RunError::Input: {}", e),
            RunError::Config(e) => write!(f, "RunError::Config: {}", e),
            RunError::Forecast(e) => write!(f, "RunError::Forecast: {}", e),
            RunError::Database(e) => write!(f, "RunError::Database: {}", e),
            RunError::Chart(e) => write!(f, "RunError::Chart: {}", e),
        }
    }
}
impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self { RunError::Input(e.to_string()) }
}
impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self { RunError::Config(e.0) }
}
impl From<OpenWeatherError> for RunError {
    fn from(e: OpenWeatherError) -> Self { RunError::Forecast(e) }
}
impl From<DBError> for RunError {
    fn from(e: DBError) -> Self { RunError::Database(e) }
}
impl From<ChartError> for RunError {
    fn from(e: ChartError) -> Self { RunError::Chart(e) }
}
