use chrono::NaiveDate;
use nasdaq_chart::core::{Sample, SampleSeries, TimeScale, ValueScale, project_line_paths};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn scales(series: &SampleSeries) -> (TimeScale, ValueScale) {
    (
        TimeScale::fit(series, 1000.0).expect("time scale"),
        ValueScale::fit(series, 500.0).expect("value scale"),
    )
}

#[test]
fn line_projection_keeps_single_sample_series() {
    let series =
        SampleSeries::new(vec![Sample::new(date(2012, 1, 1), 10.0)]).expect("valid series");
    let (time_scale, value_scale) = scales(&series);

    let paths = project_line_paths(&series, time_scale, value_scale).expect("project");
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].points, vec![(500.0, 0.0)]);
}

#[test]
fn line_projection_is_deterministic_and_ordered() {
    let series = SampleSeries::new(vec![
        Sample::new(date(2012, 1, 1), 0.0),
        Sample::new(date(2012, 1, 3), 100.0),
        Sample::new(date(2012, 1, 5), 50.0),
    ])
    .expect("valid series");
    let (time_scale, value_scale) = scales(&series);

    let first = project_line_paths(&series, time_scale, value_scale).expect("project");
    let second = project_line_paths(&series, time_scale, value_scale).expect("project");
    assert_eq!(first, second);

    assert_eq!(first.len(), 1);
    assert_eq!(
        first[0].points,
        vec![(0.0, 500.0), (500.0, 0.0), (1000.0, 250.0)]
    );
}

#[test]
fn missing_values_split_paths_without_empty_runs() {
    let series = SampleSeries::new(vec![
        Sample::missing(date(2012, 1, 1)),
        Sample::new(date(2012, 1, 2), 1.0),
        Sample::new(date(2012, 1, 3), 2.0),
        Sample::missing(date(2012, 1, 4)),
        Sample::missing(date(2012, 1, 5)),
        Sample::new(date(2012, 1, 6), 3.0),
        Sample::missing(date(2012, 1, 7)),
    ])
    .expect("valid series");
    let (time_scale, value_scale) = scales(&series);

    let paths = project_line_paths(&series, time_scale, value_scale).expect("project");
    let lengths: Vec<usize> = paths.iter().map(|path| path.points.len()).collect();
    assert_eq!(lengths, vec![2, 1]);
}

#[test]
fn all_missing_series_projects_nothing() {
    let series = SampleSeries::new(vec![
        Sample::missing(date(2012, 1, 1)),
        Sample::missing(date(2012, 1, 2)),
    ])
    .expect("valid series");
    let (time_scale, value_scale) = scales(&series);

    let paths = project_line_paths(&series, time_scale, value_scale).expect("project");
    assert!(paths.is_empty());
}
