//! nasdaq-chart: time-series line chart with nearest-sample hover tooltips.
//!
//! The crate loads a dated series from CSV, fits a temporal and a numeric
//! scale to it, and resolves pointer positions to the nearest sample by
//! bisection. Drawing goes through the backend-agnostic `render` layer.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
