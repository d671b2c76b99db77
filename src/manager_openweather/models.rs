use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, TimestampSeconds};

#[derive(Deserialize)]
pub struct MainData {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Deserialize)]
pub struct WindData {
    pub speed: f64,
}

#[serde_as]
#[derive(Deserialize)]
pub struct ForecastItem {
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub dt: DateTime<Utc>,
    pub main: MainData,
    pub wind: WindData,
}

#[derive(Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Option<Vec<ForecastItem>>,
}

/// One forecast sample for a city
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub city: String,
}
