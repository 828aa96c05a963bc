use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use nasdaq_chart::core::{LinearScale, Sample, SampleSeries, TimeScale, ValueScale, nice_ticks};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn linear_scale_round_trip_value_pixel_value() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_range(original).expect("to pixel");
    let recovered = scale.range_to_domain(px).expect("to value");
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn linear_scale_supports_inverted_range() {
    let scale = LinearScale::new(0.0, 100.0, 400.0, 0.0).expect("valid scale");

    assert_abs_diff_eq!(scale.domain_to_range(0.0).expect("bottom"), 400.0);
    assert_abs_diff_eq!(scale.domain_to_range(100.0).expect("top"), 0.0);
    assert_abs_diff_eq!(scale.domain_to_range(25.0).expect("quarter"), 300.0);
}

#[test]
fn linear_scale_rejects_degenerate_or_non_finite_bounds() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 10.0, 10.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0).is_err());

    let scale = LinearScale::new(0.0, 1.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.domain_to_range(f64::INFINITY).is_err());
    assert!(scale.range_to_domain(f64::NAN).is_err());
}

#[test]
fn nice_ticks_use_round_steps() {
    assert_eq!(
        nice_ticks(0.0, 10.0, 10),
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
    );
    assert_eq!(
        nice_ticks(0.0, 1.0, 5),
        vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]
    );
    assert_eq!(
        nice_ticks(0.0, 16_000.0, 10),
        vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10_000.0, 12_000.0, 14_000.0, 16_000.0]
    );
}

#[test]
fn nice_ticks_handle_degenerate_requests() {
    assert!(nice_ticks(0.0, 10.0, 0).is_empty());
    assert!(nice_ticks(10.0, 0.0, 5).is_empty());
    assert!(nice_ticks(f64::NAN, 1.0, 5).is_empty());
    assert_eq!(nice_ticks(3.0, 3.0, 5), vec![3.0]);
}

#[test]
fn value_scale_maps_zero_to_baseline_and_max_to_top() {
    let scale = ValueScale::new(2900.0, 390.0).expect("value scale");

    assert_eq!(scale.domain(), (0.0, 2900.0));
    assert_abs_diff_eq!(scale.value_to_pixel(0.0).expect("zero"), 390.0);
    assert_abs_diff_eq!(scale.value_to_pixel(2900.0).expect("max"), 0.0);
    assert_abs_diff_eq!(scale.value_to_pixel(1450.0).expect("half"), 195.0);
    assert_abs_diff_eq!(scale.plot_height(), 390.0);
}

#[test]
fn value_scale_falls_back_to_unit_domain_without_positive_max() {
    for max in [0.0, -12.0, f64::NAN] {
        let scale = ValueScale::new(max, 100.0).expect("value scale");
        assert_eq!(scale.domain(), (0.0, 1.0));
    }

    let series = SampleSeries::new(vec![
        Sample::missing(date(2012, 1, 1)),
        Sample::missing(date(2012, 1, 2)),
    ])
    .expect("valid series");
    let scale = ValueScale::fit(&series, 100.0).expect("fitted scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn value_scale_fit_ignores_missing_values() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 2600.0),
        Sample::missing(date(2012, 2, 1)),
        Sample::new(date(2012, 3, 1), 2900.0),
    ])
    .expect("valid series");

    let scale = ValueScale::fit(&series, 390.0).expect("fitted scale");
    assert_eq!(scale.domain(), (0.0, 2900.0));
}

#[test]
fn time_scale_maps_extreme_dates_to_plot_edges() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 2600.0),
        Sample::new(date(2012, 2, 1), 2800.0),
        Sample::new(date(2012, 3, 1), 2900.0),
    ])
    .expect("valid series");
    let scale = TimeScale::fit(&series, 1490.0).expect("time scale");

    assert_abs_diff_eq!(scale.date_to_pixel(date(2012, 1, 1)).expect("first"), 0.0);
    assert_abs_diff_eq!(
        scale.date_to_pixel(date(2012, 3, 1)).expect("last"),
        1490.0,
        epsilon = 1e-9
    );
    assert_abs_diff_eq!(scale.plot_width(), 1490.0);
}

#[test]
fn time_scale_pads_single_date_domain() {
    let series =
        SampleSeries::new(vec![Sample::new(date(2018, 5, 5), 7000.0)]).expect("valid series");
    let scale = TimeScale::fit(&series, 200.0).expect("time scale");

    let (start, end) = scale.domain();
    assert_abs_diff_eq!(end - start, 86_400.0);
    assert_abs_diff_eq!(
        scale.date_to_pixel(date(2018, 5, 5)).expect("centre"),
        100.0,
        epsilon = 1e-9
    );
}

#[test]
fn time_scale_rejects_invalid_width() {
    assert!(TimeScale::new(0.0, 86_400.0, 0.0).is_err());
    assert!(TimeScale::new(0.0, 86_400.0, f64::NAN).is_err());
    assert!(TimeScale::new(f64::INFINITY, 86_400.0, 100.0).is_err());
}
