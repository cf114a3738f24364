//! Session state for a forecasting front end
//!
//! A session owns the single mutable dataset slot and the most recent
//! forecast. Each user action (load a file, generate demo data, train,
//! export) runs as one synchronous pass over that slot. There is no
//! internal locking; a host embedding this in a concurrent runtime must
//! serialize actions itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::codec;
use crate::data::FootfallSeries;
use crate::error::{FootfallError, Result};
use crate::generate;
use crate::models::exponential_smoothing::{ExponentialSmoothing, DEFAULT_ALPHA};
use crate::models::linear::LinearTrend;
use crate::models::moving_average::{MovingAverage, DEFAULT_WINDOW};
use crate::models::{
    check_horizon, check_min_observations, Forecast, ForecastModel, ModelKind,
    TrainedForecastModel,
};

/// Minimum observations required before training
pub const MIN_TRAIN_OBSERVATIONS: usize = 3;

/// Default forecast horizon in days
pub const DEFAULT_HORIZON: usize = 14;

/// File name offered for CSV exports
pub const EXPORT_FILE_NAME: &str = "footfall_export.csv";

/// Model selection and tuning parameters for a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSettings {
    /// Which model family to train
    pub model: ModelKind,
    /// Days to forecast past the last observation
    pub horizon: usize,
    /// Averaging window for the moving average model
    pub window: usize,
    /// Smoothing constant for exponential smoothing
    pub alpha: f64,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            model: ModelKind::Linear,
            horizon: DEFAULT_HORIZON,
            window: DEFAULT_WINDOW,
            alpha: DEFAULT_ALPHA,
        }
    }
}

impl ForecastSettings {
    /// Check the parts of the settings every model shares
    ///
    /// Model-specific parameters (window, alpha) are checked by the model
    /// constructors, so a bad window does not block a linear training run.
    pub fn validate(&self) -> Result<()> {
        check_horizon(self.horizon)
    }
}

/// A named CSV payload ready to hand to the host for download
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    /// Suggested file name
    pub file_name: String,
    /// CSV text
    pub contents: String,
}

/// Dataset slot plus the latest forecast for one user session
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Currently loaded dataset
    dataset: FootfallSeries,
    /// Most recent trained forecast, if any
    forecast: Option<Forecast>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently loaded dataset
    pub fn dataset(&self) -> &FootfallSeries {
        &self.dataset
    }

    /// Get the most recent forecast, if one has been trained
    pub fn forecast(&self) -> Option<&Forecast> {
        self.forecast.as_ref()
    }

    /// Replace the dataset with rows parsed from CSV text
    ///
    /// Input with zero usable rows leaves the current dataset in place and
    /// reports `EmptyDataset`. A previously trained forecast is kept until
    /// the next training run, matching front ends that leave the last chart
    /// on screen while a new file loads.
    pub fn load_csv(&mut self, text: &str) -> Result<usize> {
        let parsed = codec::parse(text);
        if parsed.is_empty() {
            return Err(FootfallError::EmptyDataset);
        }

        info!("Loaded {} observations from CSV", parsed.len());
        self.dataset = parsed;
        Ok(self.dataset.len())
    }

    /// Replace the dataset with a synthetic series
    pub fn generate_demo(&mut self, start: NaiveDate, days: usize) -> usize {
        self.dataset = generate::synthetic_series(start, days);
        info!("Generated {} synthetic observations", self.dataset.len());
        self.dataset.len()
    }

    /// Train the selected model and store its forecast
    ///
    /// Either a full horizon of predictions is produced and stored, or the
    /// session is left unchanged and the error is returned.
    pub fn train(&mut self, settings: &ForecastSettings) -> Result<Forecast> {
        settings.validate()?;
        check_min_observations(&self.dataset, MIN_TRAIN_OBSERVATIONS)?;

        let forecast = match settings.model {
            ModelKind::Linear => {
                let trained = LinearTrend::new().train(&self.dataset)?;
                trained.forecast(settings.horizon)?
            }
            ModelKind::MovingAverage => {
                let trained = MovingAverage::new(settings.window)?.train(&self.dataset)?;
                trained.forecast(settings.horizon)?
            }
            ModelKind::ExponentialSmoothing => {
                let trained = ExponentialSmoothing::new(settings.alpha)?.train(&self.dataset)?;
                trained.forecast(settings.horizon)?
            }
        };

        info!(
            "Trained {} over {} observations, forecast horizon {}",
            settings.model.label(),
            self.dataset.len(),
            forecast.horizon()
        );

        self.forecast = Some(forecast.clone());
        Ok(forecast)
    }

    /// Build the export payload for the current dataset and forecast
    ///
    /// Observed rows come first, then the stored forecast rows rounded to
    /// whole visitors. Exporting with no dataset loaded is an error.
    pub fn export_csv(&self) -> Result<CsvExport> {
        if self.dataset.is_empty() {
            return Err(FootfallError::EmptyDataset);
        }

        let contents = match &self.forecast {
            Some(forecast) => codec::serialize_with_forecast(&self.dataset, forecast)?,
            None => codec::serialize(&self.dataset)?,
        };

        Ok(CsvExport {
            file_name: EXPORT_FILE_NAME.to_string(),
            contents,
        })
    }
}
