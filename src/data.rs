//! Time series data handling for footfall observations

use crate::error::{FootfallError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// A single (date, count) data point in a footfall series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar day of the observation (no time component)
    pub date: NaiveDate,
    /// Visitor count; finite and non-negative, not necessarily integral
    pub count: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, count: f64) -> Self {
        Self { date, count }
    }
}

/// An ordered sequence of footfall observations
///
/// Observations are sorted ascending by date. Calendar gaps are permitted
/// and duplicate dates are kept in their incoming order rather than
/// deduplicated. A series is immutable once produced; transformations
/// build new sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FootfallSeries {
    observations: Vec<Observation>,
}

impl FootfallSeries {
    /// Create an empty series
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a series from observations, normalizing order
    ///
    /// Sorts ascending by date (stable, so duplicate dates keep their
    /// incoming order) and rejects observations whose count is negative
    /// or not finite.
    pub fn from_observations(mut observations: Vec<Observation>) -> Result<Self> {
        for obs in &observations {
            if !obs.count.is_finite() || obs.count < 0.0 {
                return Err(FootfallError::InvalidData(format!(
                    "count for {} must be a finite non-negative number, got {}",
                    obs.date, obs.count
                )));
            }
        }

        observations.sort_by_key(|obs| obs.date);
        Ok(Self { observations })
    }

    /// Create a series from parallel date and count vectors (handy in tests)
    pub fn from_parts(dates: Vec<NaiveDate>, counts: Vec<f64>) -> Result<Self> {
        if dates.len() != counts.len() {
            return Err(FootfallError::InvalidData(format!(
                "dates length ({}) doesn't match counts length ({})",
                dates.len(),
                counts.len()
            )));
        }

        let observations = dates
            .into_iter()
            .zip(counts)
            .map(|(date, count)| Observation::new(date, count))
            .collect();

        Self::from_observations(observations)
    }

    /// Build a series from observations already known to satisfy the
    /// invariants (sorted, finite, non-negative). Internal producers only.
    pub(crate) fn from_vec_unchecked(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Get the observations as a slice, indexable by position
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the observation at a position
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    /// Iterate over the observations in date order
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    /// Get the counts as a vector
    pub fn counts(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.count).collect()
    }

    /// Get the dates as a vector
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|obs| obs.date).collect()
    }

    /// Get the first observation
    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    /// Get the last observation
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Get the date of the last observation
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.observations.last().map(|obs| obs.date)
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Calculate the mean of the counts
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(FootfallError::EmptyDataset);
        }

        Ok(self.counts().mean())
    }

    /// Calculate the sample standard deviation of the counts
    pub fn std_dev(&self) -> Result<f64> {
        if self.len() < 2 {
            return Err(FootfallError::InsufficientData {
                needed: 2,
                got: self.len(),
            });
        }

        Ok(self.counts().std_dev())
    }
}
