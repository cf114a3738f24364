//! Simple exponential smoothing model

use chrono::NaiveDate;

use crate::data::FootfallSeries;
use crate::error::{FootfallError, Result};
use crate::models::{check_horizon, Forecast, ForecastModel, TrainedForecastModel};

/// Default smoothing constant
pub const DEFAULT_ALPHA: f64 = 0.35;

/// Simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

/// Trained exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
    /// Final smoothed level
    level: f64,
    /// Date of the last observation
    last_date: NaiveDate,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(FootfallError::InvalidParameter(
                "Alpha must be between 0 and 1 (exclusive)".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }

    /// Get the smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self {
            name: format!("Exponential Smoothing (alpha={})", DEFAULT_ALPHA),
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl ForecastModel for ExponentialSmoothing {
    type Trained = TrainedExponentialSmoothing;

    fn train(&self, series: &FootfallSeries) -> Result<Self::Trained> {
        let last_date = series.last_date().ok_or(FootfallError::EmptyDataset)?;
        let counts = series.counts();

        // Initialize level with the first observation
        let mut level = counts[0];

        // Update level using the exponential smoothing formula
        for &count in &counts[1..] {
            level = self.alpha * count + (1.0 - self.alpha) * level;
        }

        Ok(TrainedExponentialSmoothing {
            name: self.name.clone(),
            alpha: self.alpha,
            level,
            last_date,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedExponentialSmoothing {
    /// Get the final smoothed level
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Get the smoothing parameter
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl TrainedForecastModel for TrainedExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<Forecast> {
        check_horizon(horizon)?;

        // The forecast is flat at the final smoothed level
        let values = vec![self.level; horizon];

        Ok(Forecast::after(self.last_date, values))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
