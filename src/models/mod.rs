//! Forecasting models for daily footfall series

use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::{FootfallSeries, Observation};
use crate::error::{FootfallError, Result};
use crate::utils;

/// Forecast result anchored to calendar dates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    /// Dates the predictions fall on
    dates: Vec<NaiveDate>,
    /// Predicted counts, one per date
    values: Vec<f64>,
}

impl Forecast {
    /// Create a new forecast from parallel date and value vectors
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(FootfallError::InvalidData(format!(
                "Dates length ({}) doesn't match values length ({})",
                dates.len(),
                values.len()
            )));
        }

        Ok(Self { dates, values })
    }

    /// Create a forecast whose dates run daily after an anchor date
    pub fn after(anchor: NaiveDate, values: Vec<f64>) -> Self {
        let dates = utils::future_dates(anchor, values.len());
        Self { dates, values }
    }

    /// Get the forecast dates
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Get the predicted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of periods forecasted
    pub fn horizon(&self) -> usize {
        self.values.len()
    }

    /// View the forecast as observations with counts rounded to whole visitors
    pub fn rounded_observations(&self) -> Vec<Observation> {
        self.dates
            .iter()
            .zip(self.values.iter())
            .map(|(&date, &value)| Observation::new(date, value.round()))
            .collect()
    }

    /// Calculate mean absolute error between forecast and actual values
    pub fn mean_absolute_error(&self, actual: &[f64]) -> Result<f64> {
        if self.values.len() != actual.len() {
            return Err(FootfallError::InvalidData(format!(
                "Forecast length ({}) doesn't match actual length ({})",
                self.values.len(),
                actual.len()
            )));
        }

        let sum: f64 = self
            .values
            .iter()
            .zip(actual.iter())
            .map(|(f, a)| (f - a).abs())
            .sum();

        Ok(sum / self.values.len() as f64)
    }

    /// Calculate mean squared error between forecast and actual values
    pub fn mean_squared_error(&self, actual: &[f64]) -> Result<f64> {
        if self.values.len() != actual.len() {
            return Err(FootfallError::InvalidData(format!(
                "Forecast length ({}) doesn't match actual length ({})",
                self.values.len(),
                actual.len()
            )));
        }

        let sum: f64 = self
            .values
            .iter()
            .zip(actual.iter())
            .map(|(f, a)| (f - a).powi(2))
            .sum();

        Ok(sum / self.values.len() as f64)
    }

    /// Serialize the forecast as JSON for chart front ends
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate a forecast for future periods
    fn forecast(&self, horizon: usize) -> Result<Forecast>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a footfall series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on a footfall series
    fn train(&self, series: &FootfallSeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Identifier for the built-in model families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Ordinary least squares trend line
    Linear,
    /// Moving average with prediction feedback
    MovingAverage,
    /// Simple exponential smoothing
    ExponentialSmoothing,
}

impl ModelKind {
    /// Human-readable name for UI labels
    pub fn label(&self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear Trend",
            ModelKind::MovingAverage => "Moving Average",
            ModelKind::ExponentialSmoothing => "Exponential Smoothing",
        }
    }
}

impl FromStr for ModelKind {
    type Err = FootfallError;

    fn from_str(text: &str) -> Result<Self> {
        match text.trim().to_lowercase().as_str() {
            "linear" => Ok(ModelKind::Linear),
            "ma" => Ok(ModelKind::MovingAverage),
            "exp" => Ok(ModelKind::ExponentialSmoothing),
            other => Err(FootfallError::InvalidParameter(format!(
                "Unknown model '{}', expected one of: linear, ma, exp",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            ModelKind::Linear => "linear",
            ModelKind::MovingAverage => "ma",
            ModelKind::ExponentialSmoothing => "exp",
        };
        write!(f, "{}", token)
    }
}

/// Reject series below a training minimum
pub(crate) fn check_min_observations(series: &FootfallSeries, needed: usize) -> Result<()> {
    if series.is_empty() {
        return Err(FootfallError::EmptyDataset);
    }
    if series.len() < needed {
        return Err(FootfallError::InsufficientData {
            needed,
            got: series.len(),
        });
    }
    Ok(())
}

/// Reject zero-length forecast requests
pub(crate) fn check_horizon(horizon: usize) -> Result<()> {
    if horizon == 0 {
        return Err(FootfallError::InvalidParameter(
            "Forecast horizon must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub mod exponential_smoothing;
pub mod linear;
pub mod moving_average;
