use chrono::NaiveDate;
use footfall_forecast::generate;
use footfall_forecast::models::exponential_smoothing::ExponentialSmoothing;
use footfall_forecast::models::linear::LinearTrend;
use footfall_forecast::models::moving_average::MovingAverage;
use footfall_forecast::models::{ForecastModel, TrainedForecastModel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Footfall Forecast: Model Comparison Example");
    println!("===========================================\n");

    // Generate sample data
    println!("Generating sample data...");
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let series = generate::synthetic_series(start, 180);

    println!(
        "Generated {} days of footfall, last observed day {}\n",
        series.len(),
        series.last_date().unwrap()
    );

    // Train the three models on the same series
    println!("Training models...");
    let linear = LinearTrend::new().train(&series)?;
    let moving_average = MovingAverage::new(7)?.train(&series)?;
    let smoothing = ExponentialSmoothing::new(0.35)?.train(&series)?;
    println!("Models trained successfully\n");

    let fit = linear.fit();
    println!(
        "Fitted trend line: slope {:.3} visitors/day, intercept {:.1}\n",
        fit.slope, fit.intercept
    );

    // Forecast a week ahead with each model
    let horizon = 7;
    let linear_forecast = linear.forecast(horizon)?;
    let ma_forecast = moving_average.forecast(horizon)?;
    let exp_forecast = smoothing.forecast(horizon)?;

    println!("Forecasts for the next {} days:", horizon);
    println!(
        "{:<12} {:>10} {:>10} {:>10}",
        "date", "linear", "ma", "exp"
    );
    for i in 0..horizon {
        println!(
            "{:<12} {:>10.1} {:>10.1} {:>10.1}",
            linear_forecast.dates()[i],
            linear_forecast.values()[i],
            ma_forecast.values()[i],
            exp_forecast.values()[i]
        );
    }

    println!("\nSummary:");
    println!("1. The linear model extrapolates the fitted trend line");
    println!("2. The moving average feeds each prediction back into its window");
    println!("3. Exponential smoothing forecasts a flat line at its final level");

    Ok(())
}
