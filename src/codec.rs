//! CSV reading and writing for footfall series
//!
//! Parsing is deliberately forgiving: rows that do not yield a usable date
//! and count are dropped rather than failing the whole file, so a dataset
//! with a few bad lines still loads. Serialization always emits the
//! canonical `date,count` layout.

use std::fs;

use tracing::debug;

use crate::data::{FootfallSeries, Observation};
use crate::error::{FootfallError, Result};
use crate::models::Forecast;
use crate::utils;

/// Column names accepted for the count column of a header row
const COUNT_HEADERS: [&str; 3] = ["count", "footfall", "value"];

/// Parse CSV text into a footfall series
///
/// Rows may be comma- or tab-separated. An optional header row is
/// recognized by its column names (`date` plus one of `count`, `footfall`
/// or `value`, case-insensitive). Rows that fail to parse, and rows with
/// negative or non-finite counts, are skipped with a debug log. The result
/// is sorted by date; a file with no usable rows yields an empty series
/// rather than an error.
///
/// # Arguments
/// * `text` - Raw CSV contents
///
/// # Returns
/// * A sorted series containing every row that parsed
pub fn parse(text: &str) -> FootfallSeries {
    let mut observations = Vec::new();
    let mut first_row = true;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c| c == ',' || c == '\t')
            .map(str::trim)
            .collect();

        if first_row {
            first_row = false;
            if is_header(&fields) {
                continue;
            }
        }

        match parse_row(&fields) {
            Some(obs) => observations.push(obs),
            None => debug!("Skipping malformed CSV row: {}", line),
        }
    }

    // Stable sort keeps duplicate dates in file order
    observations.sort_by_key(|obs| obs.date);
    FootfallSeries::from_vec_unchecked(observations)
}

/// Serialize a series as `date,count` CSV with a header row
pub fn serialize(series: &FootfallSeries) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "count"])?;
    for obs in series.iter() {
        write_observation(&mut writer, obs)?;
    }
    finish_writer(writer)
}

/// Serialize a series followed by forecast rows
///
/// Observed rows come first in date order, then the forecast rows with
/// their values rounded to whole visitors. The two blocks are not merged,
/// so a forecast anchored inside the observed range keeps its own rows.
pub fn serialize_with_forecast(series: &FootfallSeries, forecast: &Forecast) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["date", "count"])?;
    for obs in series.iter() {
        write_observation(&mut writer, obs)?;
    }
    for obs in forecast.rounded_observations() {
        write_observation(&mut writer, &obs)?;
    }
    finish_writer(writer)
}

/// Load and parse a CSV file from disk
pub fn load_path(file_path: &str) -> Result<FootfallSeries> {
    let text = fs::read_to_string(file_path)?;
    Ok(parse(&text))
}

/// Serialize a series and write it to disk
pub fn save_path(file_path: &str, series: &FootfallSeries) -> Result<()> {
    fs::write(file_path, serialize(series)?)?;
    Ok(())
}

fn is_header(fields: &[&str]) -> bool {
    if fields.len() < 2 {
        return false;
    }
    let first = fields[0].to_lowercase();
    let second = fields[1].to_lowercase();
    first == "date" && COUNT_HEADERS.contains(&second.as_str())
}

fn parse_row(fields: &[&str]) -> Option<Observation> {
    if fields.len() < 2 {
        return None;
    }
    let date = utils::parse_flexible_date(fields[0])?;
    let count: f64 = fields[1].parse().ok()?;
    if !count.is_finite() || count < 0.0 {
        return None;
    }
    Some(Observation::new(date, count))
}

fn write_observation(writer: &mut csv::Writer<Vec<u8>>, obs: &Observation) -> Result<()> {
    writer.write_record([obs.date.to_string(), obs.count.to_string()])?;
    Ok(())
}

fn finish_writer(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|err| FootfallError::Csv(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| FootfallError::Csv(err.to_string()))
}
