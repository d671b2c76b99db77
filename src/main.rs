mod errors;
mod logging;
mod initialization;
mod menu;
mod manager_openweather;
mod manager_db;
mod manager_chart;
mod manager_forecast;

use std::io::{self, BufRead, Write};
use log::{error, info};
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::logging::setup_logger;
use crate::manager_forecast::{run_forecast, RunOutcome};

#[tokio::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    setup_logger(&config.logging)?;
    info!("application has started");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match run_forecast(&config, &mut input, &mut output).await {
        Ok(RunOutcome::Completed(paths)) => info!("run completed, {} chart(s) written", paths.len()),
        Ok(RunOutcome::NoForecast(city)) => info!("run ended without forecast for {}", city),
        Err(e) => {
            error!("an error occurred: {}", e);
            writeln!(output, "An error occurred. Please check the logs for details.")?;
        }
    }

    log::logger().flush();

    writeln!(output, "Press any key to exit...")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(())
}
