use chrono::NaiveDate;
use nasdaq_chart::api::{ChartEngine, ChartEngineConfig};
use nasdaq_chart::core::{Sample, SampleSeries};
use nasdaq_chart::render::{Color, PlottersRenderer};
use plotters::prelude::SVGBackend;

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
fn svg_output_contains_series_and_titles() {
    let mut svg = String::new();
    {
        let renderer = PlottersRenderer::new(SVGBackend::with_string(&mut svg, (1600, 500)));
        let mut engine = ChartEngine::new(renderer, ChartEngineConfig::default(), quarter_series())
            .expect("engine init");
        engine.render().expect("render");

        let stats = engine.renderer().last_stats();
        assert_eq!(stats.polylines_drawn, 1);
        assert_eq!(stats.circles_drawn, 0);
        assert!(stats.texts_drawn > 0);

        engine.into_renderer().present().expect("present");
    }

    assert!(svg.contains("<svg"));
    assert!(svg.contains("Performance of the NASDAQ 100"));
    assert!(svg.contains("Close Value"));
}

#[test]
fn svg_output_includes_hover_marker_and_tooltip() {
    let mut svg = String::new();
    {
        let renderer = PlottersRenderer::new(SVGBackend::with_string(&mut svg, (1600, 500)));
        let mut engine = ChartEngine::new(renderer, ChartEngineConfig::default(), quarter_series())
            .expect("engine init");
        engine.pointer_move(715.0, 40.0);
        engine.finish_animation();
        engine.render().expect("render");

        let stats = engine.renderer().last_stats();
        assert_eq!(stats.circles_drawn, 1);
        assert_eq!(stats.rects_drawn, 1);

        engine.into_renderer().present().expect("present");
    }

    assert!(svg.contains("Date: 2/1/2012"));
    assert!(svg.contains("Close Value: 3"));
    assert!(svg.contains("<circle"));
}

#[test]
fn clear_color_must_be_valid() {
    let mut svg = String::new();
    let mut renderer = PlottersRenderer::new(SVGBackend::with_string(&mut svg, (200, 100)));

    assert!(renderer.set_clear_color(Color::rgba(1.0, 0.0, 0.0, 2.0)).is_err());
    renderer
        .set_clear_color(Color::rgb(0.9, 0.9, 0.9))
        .expect("valid clear color");
    assert_eq!(renderer.clear_color(), Color::rgb(0.9, 0.9, 0.9));
}
