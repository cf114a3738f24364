use chrono::NaiveDate;
use footfall_forecast::data::{FootfallSeries, Observation};
use footfall_forecast::error::FootfallError;

fn date(text: &str) -> NaiveDate {
    text.parse().unwrap()
}

fn create_test_series() -> FootfallSeries {
    let dates = vec![
        "2023-01-01",
        "2023-01-02",
        "2023-01-03",
        "2023-01-04",
        "2023-01-05",
    ]
    .into_iter()
    .map(date)
    .collect();

    let counts = vec![100.0, 102.0, 104.0, 103.0, 105.0];

    FootfallSeries::from_parts(dates, counts).unwrap()
}

#[test]
fn test_series_basic_operations() {
    let series = create_test_series();

    assert_eq!(series.len(), 5);
    assert!(!series.is_empty());
    assert_eq!(series.counts(), vec![100.0, 102.0, 104.0, 103.0, 105.0]);
    assert_eq!(series.first().unwrap().count, 100.0);
    assert_eq!(series.last().unwrap().count, 105.0);
    assert_eq!(series.last_date(), Some(date("2023-01-05")));
    assert_eq!(series.get(2).unwrap().count, 104.0);
    assert!(series.get(5).is_none());
}

#[test]
fn test_observations_sorted_on_construction() {
    let observations = vec![
        Observation::new(date("2023-01-03"), 30.0),
        Observation::new(date("2023-01-01"), 10.0),
        Observation::new(date("2023-01-02"), 20.0),
    ];

    let series = FootfallSeries::from_observations(observations).unwrap();

    assert_eq!(series.counts(), vec![10.0, 20.0, 30.0]);
    assert_eq!(series.dates()[0], date("2023-01-01"));
}

#[test]
fn test_duplicate_dates_keep_insertion_order() {
    let observations = vec![
        Observation::new(date("2023-01-02"), 99.0),
        Observation::new(date("2023-01-01"), 1.0),
        Observation::new(date("2023-01-01"), 2.0),
    ];

    let series = FootfallSeries::from_observations(observations).unwrap();

    // Stable sort: the two 01-01 rows stay in the order they arrived
    assert_eq!(series.counts(), vec![1.0, 2.0, 99.0]);
}

#[test]
fn test_negative_count_rejected() {
    let observations = vec![Observation::new(date("2023-01-01"), -5.0)];
    let result = FootfallSeries::from_observations(observations);

    assert!(matches!(result, Err(FootfallError::InvalidData(_))));
}

#[test]
fn test_non_finite_count_rejected() {
    let observations = vec![Observation::new(date("2023-01-01"), f64::NAN)];
    assert!(FootfallSeries::from_observations(observations).is_err());

    let observations = vec![Observation::new(date("2023-01-01"), f64::INFINITY)];
    assert!(FootfallSeries::from_observations(observations).is_err());
}

#[test]
fn test_from_parts_length_mismatch() {
    let dates = vec![date("2023-01-01"), date("2023-01-02")];
    let counts = vec![100.0];

    let result = FootfallSeries::from_parts(dates, counts);
    assert!(matches!(result, Err(FootfallError::InvalidData(_))));
}

#[test]
fn test_statistical_methods() {
    let series = create_test_series();

    let mean = series.mean().unwrap();
    assert!(mean > 102.0 && mean < 104.0);

    let std_dev = series.std_dev().unwrap();
    assert!(std_dev > 1.0 && std_dev < 3.0);
}

#[test]
fn test_statistics_on_empty_or_tiny_series() {
    let empty = FootfallSeries::empty();
    assert!(matches!(empty.mean(), Err(FootfallError::EmptyDataset)));

    let single =
        FootfallSeries::from_observations(vec![Observation::new(date("2023-01-01"), 10.0)])
            .unwrap();
    assert!(matches!(
        single.std_dev(),
        Err(FootfallError::InsufficientData { needed: 2, got: 1 })
    ));
}

#[test]
fn test_empty_series() {
    let series = FootfallSeries::empty();

    assert!(series.is_empty());
    assert_eq!(series.len(), 0);
    assert!(series.first().is_none());
    assert!(series.last_date().is_none());
}
