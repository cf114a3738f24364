//! Synthetic footfall data generation
//!
//! Produces plausible daily visitor counts for demos and tests: a weekend
//! uplift, a slow seasonal swing, an occasional festival spike, a gentle
//! upward trend over the generated span, uniform noise and rare permanent
//! drifts of the base level. The range constants below are the data
//! contract for this generator and are relied on by downstream demos.

use crate::data::{FootfallSeries, Observation};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::Rng;

/// Generate a synthetic footfall series using the process-wide RNG
///
/// # Arguments
/// * `start` - Date of the first observation
/// * `days` - Number of observations to generate, one per consecutive day
///
/// # Returns
/// * A series with exactly `days` observations, counts rounded and `>= 0`
pub fn synthetic_series(start: NaiveDate, days: usize) -> FootfallSeries {
    synthetic_series_with_rng(start, days, &mut rand::thread_rng())
}

/// Generate a synthetic footfall series from a caller-supplied RNG
///
/// Substituting a seeded RNG (e.g. `StdRng::seed_from_u64`) makes the
/// output reproducible; the default entry point draws from `thread_rng`.
pub fn synthetic_series_with_rng(
    start: NaiveDate,
    days: usize,
    rng: &mut impl Rng,
) -> FootfallSeries {
    let mut observations = Vec::with_capacity(days);

    // Base visitor level for the venue
    let mut base = rng.gen_range(80.0..140.0);

    for i in 0..days {
        let date = start + Duration::days(i as i64);

        // Weekends draw a bigger crowd
        let weekly_factor = if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            1.6
        } else {
            0.95
        };

        // Slow annual swing, phase-shifted by the (0-based) month
        let seasonal = 1.0
            + 0.25
                * ((i as f64 / 365.0) * std::f64::consts::TAU + date.month0() as f64 * 0.15).sin();

        // Roughly quarterly festival day
        let festival_spike = if i % 90 == 5 {
            rng.gen_range(30.0..150.0)
        } else {
            0.0
        };

        // Gentle growth across the generated span
        let trend = 1.0 + (i as f64 / days as f64) * 0.35;

        let noise = rng.gen_range(-15.0..15.0);

        let value = (base * weekly_factor * seasonal * trend + noise + festival_spike).max(0.0);
        observations.push(Observation::new(date, value.round()));

        // Rare permanent drift of the base level, applied going forward
        if rng.gen_bool(0.02) {
            base *= 0.95 + rng.gen_range(0.0..0.08);
        }
    }

    FootfallSeries::from_vec_unchecked(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generates_one_observation_per_day() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let series = synthetic_series_with_rng(start, 120, &mut rng);

        assert_eq!(series.len(), 120);
        for (i, obs) in series.iter().enumerate() {
            assert_eq!(obs.date, start + Duration::days(i as i64));
        }
    }

    #[test]
    fn test_counts_are_rounded_and_non_negative() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let series = synthetic_series_with_rng(start, 365, &mut rng);

        for obs in series.iter() {
            assert!(obs.count >= 0.0);
            assert_eq!(obs.count.fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_reproduces_series() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let first = synthetic_series_with_rng(start, 200, &mut StdRng::seed_from_u64(42));
        let second = synthetic_series_with_rng(start, 200, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_days_yields_empty_series() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let series = synthetic_series_with_rng(start, 0, &mut rng);

        assert!(series.is_empty());
    }

    #[test]
    fn test_process_rng_entry_point() {
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let series = synthetic_series(start, 30);

        assert_eq!(series.len(), 30);
        assert!(series.iter().all(|obs| obs.count >= 0.0));
    }
}
