use chrono::NaiveDate;
use nasdaq_chart::core::{Sample, SampleSeries, TimeScale};
use nasdaq_chart::interaction::{locate, locate_index, nearest_index};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn quarter_series() -> SampleSeries {
    SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 2600.0),
        Sample::new(date(2012, 2, 1), 2800.0),
        Sample::new(date(2012, 3, 1), 2900.0),
    ])
    .expect("valid series")
}

#[test]
fn pixel_nearer_february_resolves_february_sample() {
    let series = quarter_series();
    let scale = TimeScale::fit(&series, 100.0).expect("time scale");

    let sample = locate(48.0, &series, scale);
    assert_eq!(*sample, Sample::new(date(2012, 2, 1), 2800.0));
}

#[test]
fn pixel_left_of_range_clamps_to_first_sample() {
    let series = quarter_series();
    let scale = TimeScale::fit(&series, 100.0).expect("time scale");

    let sample = locate(-20.0, &series, scale);
    assert_eq!(*sample, Sample::new(date(2012, 1, 1), 2600.0));
}

#[test]
fn pixel_right_of_range_clamps_to_last_sample() {
    let series = quarter_series();
    let scale = TimeScale::fit(&series, 100.0).expect("time scale");

    assert_eq!(locate(250.0, &series, scale).date, date(2012, 3, 1));
    assert_eq!(locate_index(1.0e9, &series, scale), 2);
}

#[test]
fn plot_edges_resolve_first_and_last_samples() {
    let series = quarter_series();
    let scale = TimeScale::fit(&series, 100.0).expect("time scale");

    assert_eq!(locate(0.0, &series, scale).date, date(2012, 1, 1));
    assert_eq!(locate(100.0, &series, scale).date, date(2012, 3, 1));
}

#[test]
fn equidistant_query_prefers_later_sample() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2020, 1, 1), 1.0),
        Sample::new(date(2020, 1, 3), 3.0),
    ])
    .expect("valid series");
    let scale = TimeScale::fit(&series, 100.0).expect("time scale");

    assert_eq!(locate(50.0, &series, scale).date, date(2020, 1, 3));

    let midpoint = Sample::missing(date(2020, 1, 2)).time();
    assert_eq!(nearest_index(&series, midpoint), 1);
}

#[test]
fn exact_date_match_returns_that_sample() {
    let series = quarter_series();
    let february = Sample::missing(date(2012, 2, 1)).time();

    assert_eq!(nearest_index(&series, february), 1);
}

#[test]
fn single_sample_series_always_resolves_that_sample() {
    let series =
        SampleSeries::new(vec![Sample::new(date(2015, 6, 1), 4500.0)]).expect("valid series");
    let scale = TimeScale::fit(&series, 640.0).expect("time scale");

    for pixel in [-100.0, 0.0, 320.0, 640.0, 10_000.0] {
        assert_eq!(locate(pixel, &series, scale).date, date(2015, 6, 1));
    }
}

#[test]
fn non_finite_pixels_clamp_instead_of_failing() {
    let series = quarter_series();
    let scale = TimeScale::fit(&series, 100.0).expect("time scale");

    assert_eq!(locate_index(f64::NAN, &series, scale), 0);
    assert_eq!(locate_index(f64::NEG_INFINITY, &series, scale), 0);
    assert_eq!(locate_index(f64::INFINITY, &series, scale), 2);
}

#[test]
fn duplicate_dates_resolve_deterministically() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2013, 1, 1), 1.0),
        Sample::new(date(2013, 1, 2), 2.0),
        Sample::new(date(2013, 1, 2), 3.0),
        Sample::new(date(2013, 1, 10), 4.0),
    ])
    .expect("valid series");

    let query = Sample::missing(date(2013, 1, 2)).time();
    let index = nearest_index(&series, query);
    assert_eq!(series.get(index).map(|s| s.date), Some(date(2013, 1, 2)));
    assert_eq!(index, nearest_index(&series, query));
}

#[test]
fn samples_without_values_are_still_located() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 2600.0),
        Sample::missing(date(2012, 2, 1)),
        Sample::new(date(2012, 3, 1), 2900.0),
    ])
    .expect("valid series");
    let scale = TimeScale::fit(&series, 100.0).expect("time scale");

    let sample = locate(48.0, &series, scale);
    assert_eq!(sample.date, date(2012, 2, 1));
    assert!(sample.value.is_none());
}
