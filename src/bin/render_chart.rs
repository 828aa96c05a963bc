use nasdaq_chart::api::{ChartEngine, ChartEngineConfig};
use nasdaq_chart::data::load_csv_path;
use nasdaq_chart::render::PlottersRenderer;
use nasdaq_chart::telemetry::init_default_tracing;
use plotters::prelude::{BitMapBackend, SVGBackend};
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str =
    "usage: render_chart --input <csv> --output <file.svg|file.png> [--config <json>] [--hover <plot-x>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputKind {
    Svg,
    Png,
}

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    hover_x: Option<f64>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let kind = output_kind(&args.output)?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartEngineConfig::default(),
    };

    let loaded = load_csv_path(&args.input).map_err(|err| err.to_string())?;
    for row in &loaded.row_errors {
        eprintln!("warning: line {}: {}", row.line, row.message);
    }

    let size = (config.viewport.width, config.viewport.height);
    match kind {
        OutputKind::Svg => {
            let renderer = PlottersRenderer::new(SVGBackend::new(&args.output, size));
            draw(renderer, config, loaded.series, args.hover_x)?;
        }
        OutputKind::Png => {
            let renderer = PlottersRenderer::new(BitMapBackend::new(&args.output, size));
            draw(renderer, config, loaded.series, args.hover_x)?;
        }
    }

    println!("chart written to {}", args.output.display());
    Ok(())
}

fn draw<DB: plotters::prelude::DrawingBackend>(
    renderer: PlottersRenderer<DB>,
    config: ChartEngineConfig,
    series: nasdaq_chart::core::SampleSeries,
    hover_x: Option<f64>,
) -> Result<(), String> {
    let mut engine = ChartEngine::new(renderer, config, series).map_err(|err| err.to_string())?;

    if let Some(x) = hover_x {
        engine.pointer_move(x, 0.0);
        engine.finish_animation();
        if let Some(tooltip) = engine.tooltip() {
            println!("{}", tooltip.content);
        }
    }

    engine.render().map_err(|err| err.to_string())?;
    engine
        .into_renderer()
        .present()
        .map_err(|err| err.to_string())
}

fn output_kind(path: &Path) -> Result<OutputKind, String> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("svg") => Ok(OutputKind::Svg),
        Some("png") => Ok(OutputKind::Png),
        _ => Err(format!(
            "unsupported output `{}` (expected .svg or .png)",
            path.display()
        )),
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut hover_x = None::<f64>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--hover" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --hover".to_owned())?;
                let x = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --hover `{value}`: {err}"))?;
                hover_x = Some(x);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    let output = output.ok_or_else(|| format!("missing --output\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        output,
        config,
        hover_x,
    })
}
