use crate::core::{SampleSeries, TimeScale, ValueScale};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Connected run of projected samples in plot pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePath {
    pub points: Vec<(f64, f64)>,
}

/// Projects the series into connected pixel paths.
///
/// Samples without a value break the line, so each returned path only joins
/// consecutive defined samples. Single-sample runs are kept as one-point
/// paths so renderers can decide whether to show them.
pub fn project_line_paths(
    series: &SampleSeries,
    time_scale: TimeScale,
    value_scale: ValueScale,
) -> ChartResult<Vec<LinePath>> {
    let mut paths = Vec::new();
    let mut current = Vec::new();

    for sample in series {
        match sample.value {
            Some(value) => {
                let x = time_scale.date_to_pixel(sample.date)?;
                let y = value_scale.value_to_pixel(value)?;
                current.push((x, y));
            }
            None if !current.is_empty() => {
                paths.push(LinePath {
                    points: std::mem::take(&mut current),
                });
            }
            None => {}
        }
    }

    if !current.is_empty() {
        paths.push(LinePath { points: current });
    }

    Ok(paths)
}
