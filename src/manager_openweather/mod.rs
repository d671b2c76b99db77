pub mod errors;
pub mod models;

use log::{error, warn};
use reqwest::Client;
use crate::manager_openweather::errors::OpenWeatherError;
use crate::manager_openweather::models::{ForecastResponse, Observation};


/// Struct for fetching five-day weather forecasts from OpenWeatherMap
pub struct OpenWeather {
    client: Client,
    base_url: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'base_url' - API root, the forecast endpoint is expected at {base_url}/forecast
    pub fn new(base_url: &str) -> Result<OpenWeather, OpenWeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Retrieves the forecast for the given city in metric units.
    ///
    /// Exactly one request is made. A non-successful status or a forecast without entries
    /// is logged and gives None, while a document that can't be decoded is an error.
    ///
    /// # Arguments
    ///
    /// * 'api_key' - OpenWeatherMap API key
    /// * 'city' - name of the city to get a forecast for
    pub async fn new_forecast(&self, api_key: &str, city: &str) -> Result<Option<Vec<Observation>>, OpenWeatherError> {
        let url = format!("{}/forecast", self.base_url);

        let req = self.client
            .get(url)
            .query(&[("q", city), ("units", "metric"), ("appid", api_key)])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            error!("failed to fetch weather data for {}, status code: {}", city, status);
            return Ok(None);
        }

        let json = req.text().await?;
        let response: ForecastResponse = serde_json::from_str(&json)?;

        let items = match response.list {
            Some(items) if !items.is_empty() => items,
            _ => {
                warn!("no weather data found for {}", city);
                return Ok(None);
            }
        };

        let forecast = items
            .into_iter()
            .map(|item| Observation {
                timestamp: item.dt,
                temperature: item.main.temp,
                humidity: item.main.humidity,
                wind_speed: item.wind.speed,
                city: city.to_string(),
            })
            .collect();

        Ok(Some(forecast))
    }
}
