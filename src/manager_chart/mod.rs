pub mod errors;

use std::ops::Range;
use std::path::{Path, PathBuf};
use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;
use plotters::style::FontTransform;
use crate::initialization::Charts;
use crate::manager_chart::errors::ChartError;
use crate::manager_openweather::models::Observation;
use crate::menu::ChartKind;

const BAR_LABEL_FORMAT: &str = "%d/%m/%Y %H:%M";

/// A measured quantity that can be plotted as a series
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Measure {
    Temperature,
    Humidity,
    WindSpeed,
}

impl Measure {
    pub fn value(&self, observation: &Observation) -> f64 {
        match self {
            Measure::Temperature => observation.temperature,
            Measure::Humidity => observation.humidity,
            Measure::WindSpeed => observation.wind_speed,
        }
    }

    fn legend(&self) -> &'static str {
        match self {
            Measure::Temperature => "Temperature (°C)",
            Measure::Humidity => "Humidity (%)",
            Measure::WindSpeed => "Windspeed (m/s)",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Measure::Temperature => "Temperature Over Time",
            Measure::Humidity => "Humidity Over Time",
            Measure::WindSpeed => "Windspeed Over Time",
        }
    }

    fn color(&self) -> RGBColor {
        match self {
            Measure::Temperature => MAGENTA,
            Measure::Humidity => GREEN,
            Measure::WindSpeed => CYAN,
        }
    }
}

/// Renders the charts belonging to the given chart kind and returns the paths written to
///
/// # Arguments
///
/// * 'kind' - which chart layout to produce
/// * 'observations' - forecast observations in ascending time order, must not be empty
/// * 'config' - output paths and image size
pub fn render(kind: ChartKind, observations: &[Observation], config: &Charts) -> Result<Vec<PathBuf>, ChartError> {
    let size = (config.width, config.height);
    if let Some(first) = observations.first() {
        debug!("rendering {:?} for {} from {} observations", kind, first.city, observations.len());
    }

    match kind {
        ChartKind::CombinedScatter => {
            scatter_chart(
                observations,
                &[Measure::Temperature, Measure::Humidity, Measure::WindSpeed],
                "Weather Data Over Time",
                "Value",
                &config.scatter_combined_path,
                size,
            )?;
            Ok(vec![config.scatter_combined_path.clone()])
        }
        ChartKind::TemperatureScatter => {
            scatter_chart(
                observations,
                &[Measure::Temperature],
                Measure::Temperature.title(),
                Measure::Temperature.legend(),
                &config.scatter_temperature_path,
                size,
            )?;
            Ok(vec![config.scatter_temperature_path.clone()])
        }
        ChartKind::Bars => {
            let charts = [
                (Measure::Temperature, &config.bar_temperature_path),
                (Measure::Humidity, &config.bar_humidity_path),
                (Measure::WindSpeed, &config.bar_wind_speed_path),
            ];
            let mut paths = Vec::with_capacity(charts.len());
            for (measure, path) in charts {
                bar_chart(observations, measure, path, size)?;
                paths.push(path.clone());
            }
            Ok(paths)
        }
    }
}

/// Returns the bar position and height for every observation.
///
/// Bars are placed on their index rather than their timestamp so that they are evenly
/// spaced whatever the gaps between forecast times.
///
/// # Arguments
///
/// * 'observations' - forecast observations
/// * 'measure' - quantity giving the bar height
pub fn bar_positions(observations: &[Observation], measure: Measure) -> Vec<(usize, f64)> {
    observations
        .iter()
        .enumerate()
        .map(|(i, o)| (i, measure.value(o)))
        .collect()
}

/// Draws one line series per measure against a date axis
///
fn scatter_chart(
    observations: &[Observation],
    measures: &[Measure],
    title: &str,
    y_desc: &str,
    path: &Path,
    size: (u32, u32),
) -> Result<(), ChartError> {
    let time_range = time_range(observations)?;
    let values: Vec<f64> = measures
        .iter()
        .flat_map(|m| observations.iter().map(move |o| m.value(o)))
        .collect();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(RangedDateTime::from(time_range), value_range(&values, false))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc(y_desc)
        .x_label_formatter(&|dt: &DateTime<Utc>| dt.format("%d/%m %H:%M").to_string())
        .light_line_style(BLACK.mix(0.1))
        .draw()?;

    for measure in measures {
        let color = measure.color();
        chart
            .draw_series(LineSeries::new(
                observations.iter().map(|o| (o.timestamp, measure.value(o))),
                color.stroke_width(3),
            ))?
            .label(measure.legend())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Draws one bar per observation with the formatted forecast time as tick label
///
fn bar_chart(observations: &[Observation], measure: Measure, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
    if observations.is_empty() {
        return Err(ChartError::from("no observations to plot"));
    }

    let bars = bar_positions(observations, measure);
    let values: Vec<f64> = bars.iter().map(|(_, v)| *v).collect();
    let labels: Vec<String> = observations
        .iter()
        .map(|o| o.timestamp.format(BAR_LABEL_FORMAT).to_string())
        .collect();
    let color = measure.color();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(measure.title(), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(160)
        .y_label_area_size(80)
        .build_cartesian_2d((0..bars.len()).into_segmented(), value_range(&values, true))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|v: &SegmentValue<usize>| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .x_desc("Time")
        .y_desc(measure.legend())
        .draw()?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(4)
                .data(bars.iter().copied()),
        )?
        .label(measure.legend())
        .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], color.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Returns the span of forecast times, widened to two hours when all observations share
/// the same time
///
fn time_range(observations: &[Observation]) -> Result<Range<DateTime<Utc>>, ChartError> {
    let start = observations.iter().map(|o| o.timestamp).min().ok_or("no observations to plot")?;
    let end = observations.iter().map(|o| o.timestamp).max().ok_or("no observations to plot")?;

    if start == end {
        Ok(start - TimeDelta::hours(1)..end + TimeDelta::hours(1))
    } else {
        Ok(start..end)
    }
}

/// Returns a value axis covering all values with ten percent headroom
///
/// # Arguments
///
/// * 'values' - values to be plotted
/// * 'include_zero' - bars grow from zero so the axis must reach it
fn value_range(values: &[f64], include_zero: bool) -> Range<f64> {
    let (mut min, mut max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| (min.min(*v), max.max(*v)));

    if include_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }

    let padding = if (max - min).abs() > 1e-6 { (max - min) * 0.1 } else { 1.0 };

    (min - padding)..(max + padding)
}
