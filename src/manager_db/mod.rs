pub mod errors;
mod models;

use std::path::{Path, PathBuf};
use log::info;
use rusqlite::{params, Connection};
use crate::manager_db::errors::DBError;
use crate::manager_db::models::WeatherRow;
use crate::manager_openweather::models::Observation;

/// Append-only store of forecast observations.
///
/// No connection is kept between calls, each operation opens the database file and
/// closes it again before returning.
pub struct DB {
    db_path: PathBuf,
}

impl DB {

    /// Creates a new instance of DB
    ///
    /// # Arguments
    ///
    /// * 'db_path' - full path to db file
    pub fn new(db_path: &Path) -> Self {
        DB { db_path: db_path.to_path_buf() }
    }

    /// Creates the database file and the WeatherData table, unless the file already exists
    /// in which case the schema is assumed to be in place.
    ///
    pub fn ensure_schema(&self) -> Result<(), DBError> {
        if self.db_path.exists() {
            return Ok(());
        }

        let db_conn = Connection::open(&self.db_path)?;
        db_conn.execute(
            "CREATE TABLE IF NOT EXISTS WeatherData (
                Id INTEGER PRIMARY KEY AUTOINCREMENT,
                Date TEXT,
                Temperature REAL,
                Humidity REAL,
                Windspeed REAL,
                City TEXT
            )",
            [],
        )?;
        info!("created database {}", self.db_path.display());

        Ok(())
    }

    /// Inserts one row per observation.
    ///
    /// Rows are inserted one statement at a time without an enclosing transaction, so
    /// rows inserted before a failure stay in the table.
    ///
    /// # Arguments
    ///
    /// * 'observations' - forecast observations in the order they should be stored
    /// * 'city' - city name to tag every row with
    pub fn insert_observations(&self, observations: &[Observation], city: &str) -> Result<usize, DBError> {
        let db_conn = Connection::open(&self.db_path)?;

        for observation in observations {
            let row = WeatherRow::new(observation, city);
            db_conn.execute(
                "INSERT INTO WeatherData (Date, Temperature, Humidity, Windspeed, City) values (?1, ?2, ?3, ?4, ?5)",
                params![row.date, row.temperature, row.humidity, row.wind_speed, row.city],
            )?;
        }
        info!("inserted {} rows for {}", observations.len(), city);

        Ok(observations.len())
    }
}
