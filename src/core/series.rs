use chrono::NaiveDate;
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::Sample;
use crate::error::{ChartError, ChartResult};

/// Non-empty sample sequence ordered ascending by date.
///
/// Both invariants are established at construction, so every consumer
/// (scales, locator, line projection) can rely on them without re-checking.
/// Equal dates are allowed and keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(mut samples: Vec<Sample>) -> ChartResult<Self> {
        if samples.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        // Non-finite values are treated as missing, same as `Sample::new`.
        let mut non_finite = 0usize;
        for sample in &mut samples {
            if sample.value.is_some_and(|value| !value.is_finite()) {
                sample.value = None;
                non_finite += 1;
            }
        }
        if non_finite > 0 {
            debug!(non_finite, "non-finite sample values treated as missing");
        }

        if !samples.windows(2).all(|pair| pair[0].date <= pair[1].date) {
            debug!(len = samples.len(), "sorting unordered samples by date");
            samples.sort_by_key(|sample| sample.date);
        }

        Ok(Self { samples })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> &Sample {
        &self.samples[0]
    }

    #[must_use]
    pub fn last(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn date_extent(&self) -> (NaiveDate, NaiveDate) {
        (self.first().date, self.last().date)
    }

    #[must_use]
    pub fn time_extent(&self) -> (f64, f64) {
        (self.first().time(), self.last().time())
    }

    /// Largest defined value, ignoring samples without one.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.samples
            .iter()
            .filter_map(|sample| sample.value)
            .map(OrderedFloat)
            .max()
            .map(|max| max.0)
    }

    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|sample| sample.value.is_some())
            .count()
    }

    /// Insertion index `i` for `time` such that every sample before `i` is
    /// at or before `time` and every sample from `i` on is after it.
    #[must_use]
    pub fn bisect_right(&self, time: f64) -> usize {
        self.samples.partition_point(|sample| sample.time() <= time)
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
