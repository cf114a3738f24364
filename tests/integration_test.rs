use chrono::NaiveDate;
use footfall_forecast::models::moving_average::MovingAverage;
use footfall_forecast::{
    codec, generate, FootfallError, ForecastModel, ForecastSettings, ModelKind, Session,
    TrainedForecastModel,
};
use tempfile::NamedTempFile;

#[test]
fn test_full_forecast_workflow() {
    // 1. Generate four months of demo data and write it to disk
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let generated = generate::synthetic_series(start, 120);

    let file = NamedTempFile::new().unwrap();
    let path = file.path().to_str().unwrap();
    codec::save_path(path, &generated).unwrap();

    // 2. Load it back and check the round trip
    let loaded = codec::load_path(path).unwrap();
    assert_eq!(loaded, generated);

    // 3. Drive a session from the loaded CSV text
    let csv_text = codec::serialize(&loaded).unwrap();
    let mut session = Session::new();
    session.load_csv(&csv_text).unwrap();
    assert_eq!(session.dataset().len(), 120);

    // 4. Train each model over the same dataset
    for model in [
        ModelKind::Linear,
        ModelKind::MovingAverage,
        ModelKind::ExponentialSmoothing,
    ] {
        let settings = ForecastSettings {
            model,
            ..ForecastSettings::default()
        };
        let forecast = session.train(&settings).unwrap();

        assert_eq!(forecast.horizon(), 14);
        assert!(forecast.values().iter().all(|&v| v >= 0.0 && v.is_finite()));
        assert_eq!(forecast.dates()[0], start + chrono::Duration::days(120));
    }

    // 5. Export and verify the payload parses back to data plus predictions
    let export = session.export_csv().unwrap();
    assert_eq!(export.file_name, "footfall_export.csv");

    let reparsed = codec::parse(&export.contents);
    assert_eq!(reparsed.len(), 120 + 14);

    // 6. Train errors surface as typed conditions, not panics
    let mut tiny = Session::new();
    tiny.load_csv("2023-01-01,1\n2023-01-02,2\n").unwrap();
    let result = tiny.train(&ForecastSettings::default());
    assert!(matches!(
        result,
        Err(FootfallError::InsufficientData { needed: 3, got: 2 })
    ));
}

#[test]
fn test_model_used_directly_without_session() {
    // The models are usable against any series, outside the session flow
    let start = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
    let series = generate::synthetic_series(start, 60);

    let trained = MovingAverage::new(5).unwrap().train(&series).unwrap();
    let forecast = trained.forecast(10).unwrap();

    assert_eq!(forecast.horizon(), 10);

    // Averages of non-negative counts stay within the observed bounds
    let max = series
        .counts()
        .into_iter()
        .fold(f64::MIN, f64::max);
    assert!(forecast.values().iter().all(|&v| v >= 0.0 && v <= max));
}
