use smallvec::SmallVec;
use tracing::warn;

use crate::core::{Sample, SampleSeries, TimeScale};

/// Resolves a horizontal plot pixel to the sample nearest in time.
///
/// The pixel is inverted through `time_scale` and the series is bisected
/// for the query time. Of the two neighbours around the insertion point the
/// one closer in time wins; on an exact tie the later sample wins.
///
/// Pixels left of the plot resolve to the first sample and pixels right of
/// it to the last one. Non-finite pixels clamp the same way (`+inf` to the
/// last sample, anything else to the first).
#[must_use]
pub fn locate(pixel_x: f64, series: &SampleSeries, time_scale: TimeScale) -> &Sample {
    let index = locate_index(pixel_x, series, time_scale);
    series.get(index).unwrap_or_else(|| series.last())
}

/// Index form of [`locate`].
#[must_use]
pub fn locate_index(pixel_x: f64, series: &SampleSeries, time_scale: TimeScale) -> usize {
    if !pixel_x.is_finite() {
        return if pixel_x == f64::INFINITY {
            series.len() - 1
        } else {
            0
        };
    }
    match time_scale.pixel_to_time(pixel_x) {
        Ok(time) => nearest_index(series, time),
        Err(err) => {
            warn!(pixel_x, error = %err, "pixel inversion failed, clamping to first sample");
            0
        }
    }
}

/// Index of the sample nearest to a logical time (seconds since epoch).
#[must_use]
pub fn nearest_index(series: &SampleSeries, time: f64) -> usize {
    if time.is_nan() {
        return 0;
    }

    let insertion = series.bisect_right(time);
    let mut candidates: SmallVec<[(usize, f64); 2]> = SmallVec::new();
    if insertion > 0 {
        candidates.push((insertion - 1, series.as_slice()[insertion - 1].time()));
    }
    if insertion < series.len() {
        candidates.push((insertion, series.as_slice()[insertion].time()));
    }

    match candidates.as_slice() {
        [(before, before_time), (after, after_time)] => {
            if time - before_time >= after_time - time {
                *after
            } else {
                *before
            }
        }
        [(only, _)] => *only,
        _ => 0,
    }
}
