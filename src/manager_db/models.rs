use crate::manager_openweather::models::Observation;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column values of one WeatherData row, the surrogate id is left to sqlite
pub struct WeatherRow<'a> {
    pub date: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub city: &'a str,
}

impl<'a> WeatherRow<'a> {
    pub fn new(observation: &Observation, city: &'a str) -> Self {
        Self {
            date: observation.timestamp.format(DATE_FORMAT).to_string(),
            temperature: observation.temperature,
            humidity: observation.humidity,
            wind_speed: observation.wind_speed,
            city,
        }
    }
}
