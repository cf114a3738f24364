//! Moving average model with prediction feedback

use chrono::NaiveDate;

use crate::data::FootfallSeries;
use crate::error::{FootfallError, Result};
use crate::models::{check_horizon, Forecast, ForecastModel, TrainedForecastModel};

/// Default averaging window in days
pub const DEFAULT_WINDOW: usize = 7;

/// Moving average model
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
}

/// Trained moving average model
#[derive(Debug, Clone)]
pub struct TrainedMovingAverage {
    /// Name of the model
    name: String,
    /// Window size
    window: usize,
    /// Observed counts the averages run over
    history: Vec<f64>,
    /// Date of the last observation
    last_date: NaiveDate,
}

impl MovingAverage {
    /// Create a new moving average model
    pub fn new(window: usize) -> Result<Self> {
        if window < 2 {
            return Err(FootfallError::InvalidParameter(
                "Window size must be at least 2".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Moving Average (window={})", window),
            window,
        })
    }

    /// Get the window size
    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for MovingAverage {
    fn default() -> Self {
        Self {
            name: format!("Moving Average (window={})", DEFAULT_WINDOW),
            window: DEFAULT_WINDOW,
        }
    }
}

impl ForecastModel for MovingAverage {
    type Trained = TrainedMovingAverage;

    fn train(&self, series: &FootfallSeries) -> Result<Self::Trained> {
        let last_date = series.last_date().ok_or(FootfallError::EmptyDataset)?;

        Ok(TrainedMovingAverage {
            name: self.name.clone(),
            window: self.window,
            history: series.counts(),
            last_date,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedMovingAverage {
    /// Extend the observed counts with `horizon` averaged steps
    ///
    /// Each step averages the last `window` elements of the working
    /// sequence (or all of them when fewer exist), clamps to `>= 0` and
    /// appends the result. Predictions feed back in as if observed, so
    /// later steps smooth over earlier predictions too.
    pub fn working_series(&self, horizon: usize) -> Vec<f64> {
        let mut work = self.history.clone();

        for _ in 0..horizon {
            let take = self.window.min(work.len());
            let window_sum: f64 = work[work.len() - take..].iter().sum();
            let prediction = (window_sum / take as f64).max(0.0);
            work.push(prediction);
        }

        work
    }
}

impl TrainedForecastModel for TrainedMovingAverage {
    fn forecast(&self, horizon: usize) -> Result<Forecast> {
        check_horizon(horizon)?;

        let work = self.working_series(horizon);
        let values = work[self.history.len()..].to_vec();

        Ok(Forecast::after(self.last_date, values))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
