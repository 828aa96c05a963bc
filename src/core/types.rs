use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::date_to_unix_seconds;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plotting area for axes, labels and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 70,
            right: 30,
            bottom: 40,
            left: 80,
        }
    }
}

impl PlotMargins {
    #[must_use]
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Resolves the plotting area size left inside `viewport`.
    pub fn plot_size(self, viewport: Viewport) -> ChartResult<(f64, f64)> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let horizontal = u64::from(self.left) + u64::from(self.right);
        let vertical = u64::from(self.top) + u64::from(self.bottom);
        if horizontal >= u64::from(viewport.width) || vertical >= u64::from(viewport.height) {
            return Err(ChartError::InvalidData(format!(
                "margins {horizontal}x{vertical} leave no plot area inside {}x{}",
                viewport.width, viewport.height
            )));
        }

        Ok((
            f64::from(viewport.width) - horizontal as f64,
            f64::from(viewport.height) - vertical as f64,
        ))
    }
}

/// One `(date, value)` observation of the input series.
///
/// `value` is `None` when the source row carried a missing or malformed
/// number; such samples still take part in nearest-sample lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl Sample {
    #[must_use]
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value: value.is_finite().then_some(value),
        }
    }

    #[must_use]
    pub fn missing(date: NaiveDate) -> Self {
        Self { date, value: None }
    }

    /// Logical time of the sample in seconds since the Unix epoch.
    #[must_use]
    pub fn time(&self) -> f64 {
        date_to_unix_seconds(self.date)
    }
}
