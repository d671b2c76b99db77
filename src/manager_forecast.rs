use std::io::{BufRead, Write};
use std::path::PathBuf;
use log::info;
use crate::errors::RunError;
use crate::initialization::Config;
use crate::manager_chart::render;
use crate::manager_db::DB;
use crate::manager_openweather::OpenWeather;
use crate::menu::{select, ChartKind, City};

/// How a forecast run ended when nothing went wrong
#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    /// The API had no forecast for the city, nothing was stored or drawn
    NoForecast(City),
    Completed(Vec<PathBuf>),
}

/// Runs one forecast from menu selection to saved charts
///
/// # Arguments
///
/// * 'config' - configuration
/// * 'input' - where menu answers are read from
/// * 'output' - where menus and messages to the user are written
pub async fn run_forecast<R: BufRead, W: Write>(config: &Config, input: &mut R, output: &mut W) -> Result<RunOutcome, RunError> {
    let city: City = select(input, output)?;
    let chart_kind: ChartKind = select(input, output)?;
    info!("selected {} with chart {:?}", city, chart_kind);

    let api_key = config.api.resolve_key()?;
    let open_weather = OpenWeather::new(&config.api.base_url)?;

    let observations = match open_weather.new_forecast(&api_key, city.name()).await? {
        Some(observations) => observations,
        None => {
            writeln!(output, "No weather data found for {}. Please check the city name or try again later.", city)?;
            return Ok(RunOutcome::NoForecast(city));
        }
    };
    info!("received {} forecast entries for {}", observations.len(), city);

    let db = DB::new(&config.db.db_path);
    db.ensure_schema()?;
    db.insert_observations(&observations, city.name())?;
    writeln!(output, "Weather data has been inserted into the SQLite database.")?;

    let paths = render(chart_kind, &observations, &config.charts)?;
    for path in &paths {
        info!("chart saved successfully at {}", path.display());
    }

    Ok(RunOutcome::Completed(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;
    use rusqlite::Connection;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use crate::initialization::{Api, Charts, Db};

    fn test_config(dir: &Path, base_url: &str) -> Config {
        Config {
            api: Api {
                base_url: base_url.to_string(),
                api_key_env: "WEATHERCHART_TEST_RUN_KEY_UNSET".to_string(),
                api_key: Some("test-key".to_string()),
            },
            db: Db { db_path: dir.join("weather_data.db") },
            charts: Charts {
                scatter_combined_path: dir.join("weather_chart_scatter_THW.png"),
                scatter_temperature_path: dir.join("weather_chart_scatter_temp.png"),
                bar_temperature_path: dir.join("weather_chart_bar_temp.png"),
                bar_humidity_path: dir.join("weather_chart_bar_hum.png"),
                bar_wind_speed_path: dir.join("weather_chart_bar_wspeed.png"),
                ..Charts::default()
            },
            ..Config::default()
        }
    }

    fn three_entries() -> serde_json::Value {
        serde_json::json!({
            "list": [
                { "dt": 1700000000, "main": { "temp": 21.5, "humidity": 60 }, "wind": { "speed": 4.2 } },
                { "dt": 1700010800, "main": { "temp": 23.0, "humidity": 55 }, "wind": { "speed": 5.1 } },
                { "dt": 1700021600, "main": { "temp": 19.75, "humidity": 70 }, "wind": { "speed": 2.0 } }
            ]
        })
    }

    #[tokio::test]
    async fn sydney_temperature_scatter_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("q", "Sydney"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(three_entries()))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), &server.uri());
        let mut input = Cursor::new("2\n3\n");
        let mut output: Vec<u8> = Vec::new();

        let outcome = run_forecast(&config, &mut input, &mut output).await.unwrap();

        let chart = dir.path().join("weather_chart_scatter_temp.png");
        assert_eq!(outcome, RunOutcome::Completed(vec![chart.clone()]));
        assert!(std::fs::metadata(&chart).unwrap().len() > 0);

        let conn = Connection::open(&config.db.db_path).unwrap();
        let rows: i64 = conn.query_row("SELECT count(*) FROM WeatherData WHERE City = 'Sydney'", [], |row| row.get(0)).unwrap();
        let first: (String, f64, f64, f64) = conn.query_row(
            "SELECT Date, Temperature, Humidity, Windspeed FROM WeatherData ORDER BY Id LIMIT 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        ).unwrap();
        assert_eq!(rows, 3);
        assert_eq!(first, ("2023-11-14 22:13:20".to_string(), 21.5, 60.0, 4.2));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Weather data has been inserted into the SQLite database."));
    }

    #[tokio::test]
    async fn bar_charts_produce_three_files() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(three_entries()))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), &server.uri());
        let mut input = Cursor::new("5\n2\n");
        let mut output: Vec<u8> = Vec::new();

        let outcome = run_forecast(&config, &mut input, &mut output).await.unwrap();

        match outcome {
            RunOutcome::Completed(paths) => {
                assert_eq!(paths.len(), 3);
                assert!(paths.iter().all(|p| p.exists()));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_forecast_skips_store_and_charts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), &server.uri());
        let mut input = Cursor::new("1\n1\n");
        let mut output: Vec<u8> = Vec::new();

        let outcome = run_forecast(&config, &mut input, &mut output).await.unwrap();

        assert_eq!(outcome, RunOutcome::NoForecast(City::Townsville));
        assert!(!config.db.db_path.exists());
        assert!(!config.charts.scatter_combined_path.exists());
        assert!(String::from_utf8(output).unwrap().contains("No weather data found for Townsville."));
    }

    #[tokio::test]
    async fn malformed_forecast_is_a_run_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), &server.uri());
        let mut input = Cursor::new("3\n1\n");
        let mut output: Vec<u8> = Vec::new();

        let result = run_forecast(&config, &mut input, &mut output).await;

        assert!(matches!(result, Err(RunError::Forecast(_))));
        assert!(!config.db.db_path.exists());
    }

    #[tokio::test]
    async fn closed_input_is_a_run_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path(), "http://127.0.0.1:9");
        let mut input = Cursor::new("9\n");
        let mut output: Vec<u8> = Vec::new();

        let result = run_forecast(&config, &mut input, &mut output).await;

        assert!(matches!(result, Err(RunError::Input(_))));
    }
}
