//! # Footfall Forecast
//!
//! A Rust library for loading, generating and forecasting daily visitor
//! counts, built to sit behind a chart-drawing front end.
//!
//! ## Features
//!
//! - Footfall series handling (dated daily counts, sorted and validated)
//! - CSV import with forgiving row parsing, plus canonical CSV export
//! - Synthetic data generation for demos and tests
//! - Forecasting models (Linear Trend, Moving Average, Exponential Smoothing)
//! - Session state that drives the load/train/export flow of a UI
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use footfall_forecast::session::{ForecastSettings, Session};
//!
//! fn main() -> footfall_forecast::Result<()> {
//!     let mut session = Session::new();
//!
//!     // Fill the dataset slot with four months of demo data
//!     let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//!     session.generate_demo(start, 120);
//!
//!     // Train the default model (linear trend, 14 day horizon)
//!     let forecast = session.train(&ForecastSettings::default())?;
//!     assert_eq!(forecast.horizon(), 14);
//!
//!     // Export observations plus rounded predictions as CSV
//!     let export = session.export_csv()?;
//!     assert_eq!(export.file_name, "footfall_export.csv");
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod data;
pub mod error;
pub mod generate;
pub mod models;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use crate::data::{FootfallSeries, Observation};
pub use crate::error::{FootfallError, Result};
pub use crate::models::{Forecast, ForecastModel, ModelKind, TrainedForecastModel};
pub use crate::session::{CsvExport, ForecastSettings, Session};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
