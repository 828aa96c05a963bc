use chrono::{Duration, NaiveDate};
use nasdaq_chart::core::{Sample, SampleSeries, TimeScale};
use nasdaq_chart::interaction::{locate, locate_index};
use proptest::prelude::*;

fn build_series(mut offsets: Vec<i64>) -> SampleSeries {
    offsets.sort_unstable();
    let base = NaiveDate::from_ymd_opt(2012, 1, 3).expect("valid date");
    let samples = offsets
        .into_iter()
        .enumerate()
        .map(|(i, days)| Sample::new(base + Duration::days(days), 1000.0 + i as f64))
        .collect();
    SampleSeries::new(samples).expect("non-empty series")
}

proptest! {
    #[test]
    fn located_sample_is_nearest_in_time(
        offsets in prop::collection::vec(0i64..4000, 1..64),
        width in 50.0f64..2000.0,
        pixel_factor in 0.0f64..=1.0
    ) {
        let series = build_series(offsets);
        let scale = TimeScale::fit(&series, width).expect("time scale");
        let pixel = pixel_factor * width;
        let query = scale.pixel_to_time(pixel).expect("invert");

        let located = locate(pixel, &series, scale);
        let best = (located.time() - query).abs();
        for sample in &series {
            prop_assert!(best <= (sample.time() - query).abs() + 1e-6);
        }
    }

    #[test]
    fn locate_is_idempotent(
        offsets in prop::collection::vec(0i64..4000, 1..64),
        pixel in -500.0f64..2500.0
    ) {
        let series = build_series(offsets);
        let scale = TimeScale::fit(&series, 1490.0).expect("time scale");

        let first = locate_index(pixel, &series, scale);
        let second = locate_index(pixel, &series, scale);
        prop_assert_eq!(first, second);
        prop_assert_eq!(locate(pixel, &series, scale), locate(pixel, &series, scale));
    }

    #[test]
    fn out_of_range_pixels_clamp_to_series_ends(
        offsets in prop::collection::vec(0i64..4000, 1..64),
        overshoot in 0.001f64..10_000.0
    ) {
        let series = build_series(offsets);
        let scale = TimeScale::fit(&series, 800.0).expect("time scale");

        prop_assert_eq!(locate(-overshoot, &series, scale).date, series.first().date);
        prop_assert_eq!(locate(800.0 + overshoot, &series, scale).date, series.last().date);
    }
}
