use footfall_forecast::session::{ForecastSettings, Session};
use footfall_forecast::ModelKind;

const SAMPLE_CSV: &str = "\
date,count
2023-05-01,132
2023-05-02,148
2023-05-03,141
not-a-date,50
2023-05-04,155
2023-05-05,162
2023-05-06,239
2023-05-07,221
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("Footfall Forecast: Session Walkthrough");
    println!("======================================\n");

    let mut session = Session::new();

    // Actions on an empty session surface blocking notices, never panics
    if let Err(notice) = session.train(&ForecastSettings::default()) {
        println!("Training before loading data: {}", notice);
    }
    if let Err(notice) = session.export_csv() {
        println!("Exporting before loading data: {}\n", notice);
    }

    // Load a CSV with one malformed row; the row is dropped silently
    println!("Loading CSV ({} lines)...", SAMPLE_CSV.lines().count());
    let loaded = session.load_csv(SAMPLE_CSV)?;
    println!("Loaded {} observations\n", loaded);

    // Train the default linear model
    let forecast = session.train(&ForecastSettings::default())?;
    println!(
        "Linear forecast: {} days starting {}",
        forecast.horizon(),
        forecast.dates()[0]
    );

    // Switch to a moving average, the way a UI model selector would
    let settings = ForecastSettings {
        model: "ma".parse::<ModelKind>()?,
        horizon: 5,
        window: 3,
        ..ForecastSettings::default()
    };
    let forecast = session.train(&settings)?;
    println!(
        "Moving average forecast: {:?}\n",
        forecast
            .values()
            .iter()
            .map(|v| v.round())
            .collect::<Vec<_>>()
    );

    // Export observations plus rounded predictions
    let export = session.export_csv()?;
    println!("Export file name: {}", export.file_name);
    println!("Export payload:\n{}", export.contents);

    Ok(())
}
