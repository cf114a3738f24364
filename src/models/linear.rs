//! Linear trend model fitted by ordinary least squares

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::data::FootfallSeries;
use crate::error::{FootfallError, Result};
use crate::models::{check_horizon, Forecast, ForecastModel, TrainedForecastModel};

/// Linear trend model
#[derive(Debug, Clone)]
pub struct LinearTrend {
    /// Name of the model
    name: String,
}

/// Fitted trend line parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Change in count per day index
    pub slope: f64,
    /// Count at day index zero
    pub intercept: f64,
}

/// Trained linear trend model
#[derive(Debug, Clone)]
pub struct TrainedLinearTrend {
    /// Name of the model
    name: String,
    /// Fitted parameters
    fit: LinearFit,
    /// Number of observations the fit covers
    len: usize,
    /// Date of the last observation
    last_date: NaiveDate,
}

impl LinearTrend {
    /// Create a new linear trend model
    pub fn new() -> Self {
        Self {
            name: "Linear Trend (OLS)".to_string(),
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for LinearTrend {
    type Trained = TrainedLinearTrend;

    fn train(&self, series: &FootfallSeries) -> Result<Self::Trained> {
        let last_date = series.last_date().ok_or(FootfallError::EmptyDataset)?;
        let counts = series.counts();

        let n = counts.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xx = 0.0;
        let mut sum_xy = 0.0;

        for (i, &y) in counts.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xx += x * x;
            sum_xy += x * y;
        }

        let denominator = n * sum_xx - sum_x * sum_x;
        let fit = if denominator == 0.0 {
            // Degenerate fit for a single observation: flat line at its count
            LinearFit {
                slope: 0.0,
                intercept: counts[0],
            }
        } else {
            let slope = (n * sum_xy - sum_x * sum_y) / denominator;
            let intercept = (sum_y - slope * sum_x) / n;
            LinearFit { slope, intercept }
        };

        Ok(TrainedLinearTrend {
            name: self.name.clone(),
            fit,
            len: counts.len(),
            last_date,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedLinearTrend {
    /// Get the fitted parameters
    pub fn fit(&self) -> LinearFit {
        self.fit
    }
}

impl TrainedForecastModel for TrainedLinearTrend {
    fn forecast(&self, horizon: usize) -> Result<Forecast> {
        check_horizon(horizon)?;

        // The fit covers indices 0..n-1, so the first future day sits at index n.
        // The slope is extrapolated unbounded; long horizons can diverge.
        let n = self.len as f64;
        let values: Vec<f64> = (0..horizon)
            .map(|k| (self.fit.slope * (n + k as f64) + self.fit.intercept).max(0.0))
            .collect();

        Ok(Forecast::after(self.last_date, values))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
