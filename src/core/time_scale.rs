use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{
    date_to_unix_seconds, month_index, month_start, unix_seconds_to_date,
};
use crate::core::{LinearScale, SampleSeries};
use crate::error::{ChartError, ChartResult};

/// Padding applied on either side of a zero-width date domain (half a day).
const SINGLE_DATE_HALF_SPAN_SECONDS: f64 = 43_200.0;

/// Month cadences considered when picking default time ticks.
const MONTH_TICK_STEPS: [u32; 8] = [1, 2, 3, 6, 12, 24, 60, 120];

/// Temporal axis: maps `[min_date, max_date]` onto `[0, plot_width]`.
///
/// Fitted once from a series and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Creates a scale over explicit logical times (seconds since epoch).
    pub fn new(time_start: f64, time_end: f64, plot_width: f64) -> ChartResult<Self> {
        if !time_start.is_finite() || !time_end.is_finite() {
            return Err(ChartError::InvalidData(
                "time scale range must be finite".to_owned(),
            ));
        }
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }

        let (start, end) = if time_start == time_end {
            (
                time_start - SINGLE_DATE_HALF_SPAN_SECONDS,
                time_end + SINGLE_DATE_HALF_SPAN_SECONDS,
            )
        } else {
            (time_start.min(time_end), time_start.max(time_end))
        };

        Ok(Self {
            linear: LinearScale::new(start, end, 0.0, plot_width)?,
        })
    }

    /// Fits the domain to the extreme dates of `series`.
    pub fn fit(series: &SampleSeries, plot_width: f64) -> ChartResult<Self> {
        let (start, end) = series.time_extent();
        Self::new(start, end, plot_width)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.linear.range().1
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.domain_to_range(time)
    }

    pub fn date_to_pixel(self, date: NaiveDate) -> ChartResult<f64> {
        self.time_to_pixel(date_to_unix_seconds(date))
    }

    /// Inverts a horizontal pixel into a logical time.
    ///
    /// Pixels outside `[0, plot_width]` extrapolate linearly.
    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.range_to_domain(pixel)
    }

    /// Month starts inside the domain whose absolute month index is a
    /// multiple of `every_months`.
    #[must_use]
    pub fn month_ticks(self, every_months: u32) -> Vec<NaiveDate> {
        if every_months == 0 {
            return Vec::new();
        }

        let (start, end) = self.domain();
        let (Some(first), Some(last)) = (unix_seconds_to_date(start), unix_seconds_to_date(end))
        else {
            return Vec::new();
        };

        let step = i64::from(every_months);
        let mut index = month_index(first);
        if month_start(index).is_some_and(|date| date_to_unix_seconds(date) < start) {
            index += 1;
        }
        index += (step - index.rem_euclid(step)) % step;

        let mut ticks = Vec::new();
        while index <= month_index(last) {
            match month_start(index) {
                Some(date) if date_to_unix_seconds(date) <= end => ticks.push(date),
                _ => break,
            }
            index += step;
        }
        ticks
    }

    /// Month ticks whose count lands closest to `target_count`.
    ///
    /// Ties prefer the coarser cadence.
    #[must_use]
    pub fn ticks(self, target_count: usize) -> Vec<NaiveDate> {
        if target_count == 0 {
            return Vec::new();
        }

        let mut best: Option<(usize, Vec<NaiveDate>)> = None;
        for step in MONTH_TICK_STEPS {
            let ticks = self.month_ticks(step);
            let distance = ticks.len().abs_diff(target_count);
            let coarser_or_closer = best
                .as_ref()
                .is_none_or(|(best_distance, _)| distance <= *best_distance);
            if coarser_or_closer {
                best = Some((distance, ticks));
            }
        }
        best.map(|(_, ticks)| ticks).unwrap_or_default()
    }
}
