use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, SampleSeries};
use crate::error::{ChartError, ChartResult};

/// Numeric axis: maps `[0, max_value]` onto `[plot_height, 0]`.
///
/// The range is inverted so larger values render higher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(max_value: f64, plot_height: f64) -> ChartResult<Self> {
        if !plot_height.is_finite() || plot_height <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale height must be finite and > 0".to_owned(),
            ));
        }

        let domain_end = if max_value.is_finite() && max_value > 0.0 {
            max_value
        } else {
            1.0
        };

        Ok(Self {
            linear: LinearScale::new(0.0, domain_end, plot_height, 0.0)?,
        })
    }

    /// Fits `[0, max]` over the defined values of `series`.
    ///
    /// Series without any positive value fall back to `[0, 1]`.
    pub fn fit(series: &SampleSeries, plot_height: f64) -> ChartResult<Self> {
        Self::new(series.max_value().unwrap_or(1.0), plot_height)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.linear.range().0
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        self.linear.domain_to_range(value)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        self.linear.range_to_domain(pixel)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        self.linear.ticks(count)
    }
}
