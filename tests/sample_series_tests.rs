use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use nasdaq_chart::ChartError;
use nasdaq_chart::api::{ChartEngine, ChartEngineConfig};
use nasdaq_chart::core::{Sample, SampleSeries};
use nasdaq_chart::interaction::TooltipVisibility;
use nasdaq_chart::render::NullRenderer;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn empty_series_is_rejected() {
    let err = SampleSeries::new(Vec::new()).expect_err("empty series");
    assert!(matches!(err, ChartError::EmptySeries));
}

#[test]
fn unordered_samples_are_sorted_stably() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 3, 1), 3.0),
        Sample::new(date(2012, 1, 1), 1.0),
        Sample::new(date(2012, 3, 1), 4.0),
        Sample::new(date(2012, 2, 1), 2.0),
    ])
    .expect("valid series");

    let values: Vec<Option<f64>> = series.iter().map(|sample| sample.value).collect();
    assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
    assert_eq!(series.date_extent(), (date(2012, 1, 1), date(2012, 3, 1)));
}

#[test]
fn max_value_ignores_missing_samples() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 2600.0),
        Sample::missing(date(2012, 1, 2)),
        Sample::new(date(2012, 1, 3), 2900.0),
    ])
    .expect("valid series");

    assert_eq!(series.max_value(), Some(2900.0));
    assert_eq!(series.defined_count(), 2);

    let empty_values =
        SampleSeries::new(vec![Sample::missing(date(2012, 1, 1))]).expect("valid series");
    assert_eq!(empty_values.max_value(), None);
}

#[test]
fn bisect_right_places_equal_times_before_insertion_point() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 1.0),
        Sample::new(date(2012, 1, 2), 2.0),
        Sample::new(date(2012, 1, 2), 3.0),
        Sample::new(date(2012, 1, 5), 4.0),
    ])
    .expect("valid series");

    let jan_2 = Sample::missing(date(2012, 1, 2)).time();
    assert_eq!(series.bisect_right(jan_2), 3);
    assert_eq!(series.bisect_right(jan_2 - 1.0), 1);
    assert_eq!(series.bisect_right(f64::NEG_INFINITY), 0);
    assert_eq!(series.bisect_right(f64::INFINITY), 4);
}

#[test]
fn sample_time_is_utc_midnight_seconds() {
    let sample = Sample::new(date(2012, 1, 1), 2600.0);
    assert_eq!(sample.time(), 1_325_376_000.0);
}

#[test]
fn non_finite_values_from_struct_literals_become_missing() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 2600.0),
        Sample {
            date: date(2012, 2, 1),
            value: Some(f64::NAN),
        },
        Sample {
            date: date(2012, 3, 1),
            value: Some(f64::INFINITY),
        },
        Sample::new(date(2012, 4, 1), 2900.0),
    ])
    .expect("valid series");

    assert!(series.get(1).expect("february").value.is_none());
    assert!(series.get(2).expect("march").value.is_none());
    assert_eq!(series.defined_count(), 2);
    assert_eq!(series.max_value(), Some(2900.0));
}

#[test]
fn engine_over_a_nan_sample_renders_and_shows_not_available() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 2600.0),
        Sample {
            date: date(2012, 2, 1),
            value: Some(f64::NAN),
        },
        Sample::new(date(2012, 3, 1), 2900.0),
    ])
    .expect("valid series");
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), series)
        .expect("engine init");
    engine.render().expect("render");

    let x = engine
        .map_date_to_pixel(date(2012, 2, 1))
        .expect("date maps to pixel");
    engine.pointer_move(x, 10.0);

    assert_eq!(engine.tooltip_visibility(), TooltipVisibility::Shown);
    let tooltip = engine.tooltip().expect("tooltip");
    assert_eq!(tooltip.content.value_label, "N/A");
    assert_abs_diff_eq!(
        engine.cursor_state().snap.expect("snap").marker_y,
        engine.plot_height()
    );
    engine.render().expect("render while hovering");
}
